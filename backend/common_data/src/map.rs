use serde::{Deserialize, Serialize};

use crate::directory::SearchResult;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// What the map should show for one snapshot of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPlan {
    pub points: Vec<Coordinate>,
    pub camera: Coordinate,
}

/// One marker per result, in result order, with the camera on the first one.
/// An empty result list leaves the map alone.
pub fn marker_plan(results: &[SearchResult]) -> Option<MarkerPlan> {
    let camera = results.first()?.coordinate();
    Some(MarkerPlan {
        points: results.iter().map(SearchResult::coordinate).collect(),
        camera,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(json: &str) -> Vec<SearchResult> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_results_have_no_plan() {
        assert_eq!(marker_plan(&[]), None);
    }

    #[test]
    fn tomato_search_puts_one_marker_on_acme() {
        let results = results(
            r#"[{"product":{"id":1,"name":"Tomato","description":"Heirloom"},
                 "company":{"trade_name":"Acme Farms","address":{"latitude":40.1,"longitude":-74.2}}}]"#,
        );
        let plan = marker_plan(&results).unwrap();

        assert_eq!(plan.points.len(), 1);
        assert_eq!(plan.points[0].longitude, -74.2);
        assert_eq!(plan.points[0].latitude, 40.1);
        assert_eq!(plan.camera, Coordinate::new(40.1, -74.2));
    }

    #[test]
    fn one_point_per_result_camera_on_first() {
        let results = results(
            r#"[
                {"product":{"id":1,"name":"Kale"},"company":{"trade_name":"A","address":{"latitude":1.0,"longitude":2.0}}},
                {"product":{"id":2,"name":"Kale"},"company":{"trade_name":"B","address":{"latitude":3.0,"longitude":4.0}}},
                {"product":{"id":3,"name":"Kale"},"company":{"trade_name":"A","address":{"latitude":1.0,"longitude":2.0}}}
            ]"#,
        );
        let plan = marker_plan(&results).unwrap();

        assert_eq!(
            plan.points,
            vec![
                Coordinate::new(1.0, 2.0),
                Coordinate::new(3.0, 4.0),
                Coordinate::new(1.0, 2.0),
            ]
        );
        assert_eq!(plan.camera, Coordinate::new(1.0, 2.0));
    }
}
