//! Rows returned by the regions endpoint (`GET <regions_url>[?region=...]`).
//!
//! Without a filter the endpoint answers with one object per distinct site.
//! With a `region` filter it answers with the bare list of matching site IDs.
//! `RegionsResponse` accepts both shapes.

use serde::{Deserialize, Serialize};

/// One monitoring site as listed by the regions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSite {
    pub region: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "AQS_Site_ID")]
    pub aqs_site_id: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionsResponse {
    Sites(Vec<RegionSite>),
    SiteIds(Vec<String>),
}

impl RegionsResponse {
    pub fn len(&self) -> usize {
        match self {
            RegionsResponse::Sites(sites) => sites.len(),
            RegionsResponse::SiteIds(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_response_parses_as_sites() {
        let body = r#"[{"region":"Iowa","ID":"IA3","AQS_Site_ID":"19-153-0030","Latitude":41.60316,"Longitude":-93.6431}]"#;
        let response: RegionsResponse = serde_json::from_str(body).unwrap();
        match &response {
            RegionsResponse::Sites(sites) => {
                assert_eq!(sites[0].id, "IA3");
                assert_eq!(sites[0].aqs_site_id, "19-153-0030");
                assert_eq!(sites[0].latitude, 41.60316);
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn filtered_response_parses_as_ids() {
        let response: RegionsResponse = serde_json::from_str(r#"["IA3","IA7"]"#).unwrap();
        assert_eq!(
            response,
            RegionsResponse::SiteIds(vec!["IA3".into(), "IA7".into()])
        );
        assert_eq!(response.len(), 2);
    }

    #[test]
    fn empty_response_is_empty() {
        let response: RegionsResponse = serde_json::from_str("[]").unwrap();
        assert!(response.is_empty());
    }
}
