use async_trait::async_trait;
use rideover_store::app_config::MapSettings;
use serde::{Deserialize, Serialize};

/// Geographic coordinate pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Accra city center, where the map opens.
pub const MAP_CENTER: LatLng = LatLng {
    lat: 5.6037,
    lng: -0.1870,
};

/// Fixed demo coordinates for the pickup marker.
pub const PICKUP_POINT: LatLng = LatLng {
    lat: 5.6037,
    lng: -0.1870,
};

/// Fixed demo coordinates for the destination marker.
pub const DESTINATION_POINT: LatLng = LatLng {
    lat: 5.6500,
    lng: -0.1962,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub position: LatLng,
    pub title: String,
}

/// A driving route between two points, rendered by the widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrivingRoute {
    pub origin: LatLng,
    pub destination: LatLng,
}

/// The widget's view of the map once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub route: Option<DrivingRoute>,
}

impl MapView {
    /// Place the pickup/destination markers and the driving route between
    /// the fixed demo coordinates.
    pub fn with_trip_overlay(mut self) -> Self {
        self.markers = vec![
            Marker {
                position: PICKUP_POINT,
                title: "Pickup Location".to_string(),
            },
            Marker {
                position: DESTINATION_POINT,
                title: "Destination".to_string(),
            },
        ];
        self.route = Some(DrivingRoute {
            origin: PICKUP_POINT,
            destination: DESTINATION_POINT,
        });
        self
    }
}

/// Loader seam for the third-party mapping widget.
#[async_trait]
pub trait MapLoader: Send + Sync {
    async fn load(&self, settings: &MapSettings) -> anyhow::Result<MapView>;
}

/// Default loader standing in for the hosted widget: initializes a bare
/// map view, failing the way the real loader does when no API key is
/// configured.
#[derive(Debug, Default)]
pub struct WidgetLoader;

#[async_trait]
impl MapLoader for WidgetLoader {
    async fn load(&self, settings: &MapSettings) -> anyhow::Result<MapView> {
        if settings.api_key.is_empty() {
            anyhow::bail!("mapping widget rejected the request: missing API key");
        }

        Ok(MapView {
            center: MAP_CENTER,
            zoom: settings.zoom,
            markers: Vec::new(),
            route: None,
        })
    }
}

/// Ride-page map lifecycle: loading until the widget resolves, then ready,
/// or a placeholder when the widget fails.
#[derive(Debug, Clone)]
pub enum MapState {
    Loading,
    Ready(MapView),
    Placeholder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loader_initializes_a_bare_view() {
        let view = WidgetLoader
            .load(&MapSettings::default())
            .await
            .unwrap();
        assert_eq!(view.center, MAP_CENTER);
        assert_eq!(view.zoom, 12);
        assert!(view.markers.is_empty());
        assert!(view.route.is_none());
    }

    #[tokio::test]
    async fn loader_fails_without_an_api_key() {
        let settings = MapSettings {
            api_key: String::new(),
            ..MapSettings::default()
        };
        assert!(WidgetLoader.load(&settings).await.is_err());
    }

    #[test]
    fn trip_overlay_places_both_markers_and_the_route() {
        let view = MapView {
            center: MAP_CENTER,
            zoom: 12,
            markers: Vec::new(),
            route: None,
        }
        .with_trip_overlay();

        assert_eq!(view.markers.len(), 2);
        assert_eq!(view.markers[0].position, PICKUP_POINT);
        assert_eq!(view.markers[1].position, DESTINATION_POINT);
        assert!(view.route.is_some());
    }
}
