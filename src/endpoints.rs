//! CDEC endpoint configuration.

/// Endpoint URLs used by the commands. Built once at startup and injected;
/// tests point the fields at a local mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub query: String,
    pub station_meta: String,
    pub nearby_map: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            query: "https://cdec.water.ca.gov/dynamicapp/req/JSONDataServlet".to_string(),
            station_meta: "https://cdec.water.ca.gov/dynamicapp/staMeta".to_string(),
            nearby_map: "https://cdec.water.ca.gov/webgis/?appid=cdecstation".to_string(),
        }
    }
}
