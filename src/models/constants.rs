/// Interaction layer for player and NPC ships.
pub const SHIP_LAYER: f64 = 50.0;
/// Interaction layer for stations and gates.
pub const STATION_LAYER: f64 = 30.0;
/// Interaction layer for planets and stars.
pub const PLANET_LAYER: f64 = 0.0;
/// Layer used when an object type is not recognised.
pub const DEFAULT_LAYER: f64 = STATION_LAYER;

/// Coordinates beyond this magnitude are flagged as numeric blow-ups.
pub const COORDINATE_LIMIT: f64 = 1_000_000.0;

/// Decimal places kept by `normalize_coordinates`.
pub const COORDINATE_DECIMALS: i32 = 3;

/// Default edge length of a spatial grid cell.
pub const DEFAULT_CELL_SIZE: f64 = 100.0;

/// Tolerance used when removing points from the spatial grid.
pub const GRID_REMOVE_TOLERANCE: f64 = 0.01;

/// Below this distance to its target an actor keeps its heading.
pub const HEADING_FREEZE_DISTANCE: f64 = 1.0;

/// Braking never drops the target speed below this fraction of base speed.
pub const MIN_BRAKING_SPEED_FRACTION: f64 = 0.1;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 3.0;

/// Kinds of spatial entity tracked by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Ship,
    NpcShip,
    Station,
    Gate,
    Planet,
    Star,
    Camera,
    Other(String),
}

impl ObjectType {
    /// Parse the type names used by collaborators ("ship", "npc-ship", ...).
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "ship" => ObjectType::Ship,
            "npc-ship" | "npc_ship" | "npc" => ObjectType::NpcShip,
            "station" => ObjectType::Station,
            "gate" => ObjectType::Gate,
            "planet" => ObjectType::Planet,
            "star" => ObjectType::Star,
            "camera" => ObjectType::Camera,
            other => ObjectType::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ObjectType::Ship => "ship",
            ObjectType::NpcShip => "npc-ship",
            ObjectType::Station => "station",
            ObjectType::Gate => "gate",
            ObjectType::Planet => "planet",
            ObjectType::Star => "star",
            ObjectType::Camera => "camera",
            ObjectType::Other(name) => name,
        }
    }

    /// Render/interaction layer for this kind of object.
    ///
    /// Gates share the station layer. Cameras and unknown kinds fall back to
    /// [`DEFAULT_LAYER`]; new object types should get an explicit arm here
    /// instead of relying on that fallback.
    pub fn layer(&self) -> f64 {
        match self {
            ObjectType::Ship | ObjectType::NpcShip => SHIP_LAYER,
            ObjectType::Station | ObjectType::Gate => STATION_LAYER,
            ObjectType::Planet | ObjectType::Star => PLANET_LAYER,
            ObjectType::Camera | ObjectType::Other(_) => DEFAULT_LAYER,
        }
    }

    pub fn is_ship(&self) -> bool {
        matches!(self, ObjectType::Ship | ObjectType::NpcShip)
    }
}

/// Layer for a collaborator-supplied type name. Unknown names map to the
/// station layer.
pub fn get_layer_for_object_type(name: &str) -> f64 {
    ObjectType::from_name(name).layer()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_lookup_by_name() {
        assert_eq!(get_layer_for_object_type("ship"), SHIP_LAYER);
        assert_eq!(get_layer_for_object_type("npc-ship"), SHIP_LAYER);
        assert_eq!(get_layer_for_object_type("station"), STATION_LAYER);
        assert_eq!(get_layer_for_object_type("planet"), PLANET_LAYER);
        assert_eq!(get_layer_for_object_type("star"), PLANET_LAYER);
        assert_eq!(get_layer_for_object_type("asteroid"), 30.0);
    }

    #[test]
    fn layers_by_type() {
        assert_eq!(ObjectType::Ship.layer(), 50.0);
        assert_eq!(ObjectType::NpcShip.layer(), 50.0);
        assert_eq!(ObjectType::Station.layer(), 30.0);
        assert_eq!(ObjectType::Planet.layer(), 0.0);
        assert_eq!(ObjectType::Star.layer(), 0.0);
    }

    #[test]
    fn unknown_type_uses_station_layer() {
        let kind = ObjectType::from_name("wormhole");
        assert_eq!(kind, ObjectType::Other("wormhole".to_string()));
        assert_eq!(kind.layer(), STATION_LAYER);
    }

    #[test]
    fn names_round_trip() {
        for kind in [
            ObjectType::Ship,
            ObjectType::NpcShip,
            ObjectType::Station,
            ObjectType::Gate,
            ObjectType::Planet,
            ObjectType::Star,
            ObjectType::Camera,
        ] {
            assert_eq!(ObjectType::from_name(kind.name()), kind);
        }
    }
}
