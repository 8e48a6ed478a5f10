// src/services/room_model.rs
use crate::models::{
    Ceiling3D, Dimensions, Floor3D, Light3D, Opening3D, Room3DModel, RoomType, Vector3, Wall3D,
};

const ROOM_WIDTH: f64 = 5.0;
const ROOM_DEPTH: f64 = 4.0;
const CEILING_HEIGHT: f64 = 3.0;
const WALL_COLOR: &str = "#F5F5F5";

/// The synthetic scene is the same skeleton for every room type; only the
/// floor finish changes.
pub fn build_room_model(room_type: RoomType) -> Room3DModel {
    let (floor_material, floor_color) = match room_type {
        RoomType::Kitchen => ("tile", "#D3D3D3"),
        _ => ("hardwood", "#8B4513"),
    };

    Room3DModel {
        walls: vec![
            Wall3D {
                points: [
                    Vector3::new(0.0, 0.0, 0.0),
                    Vector3::new(ROOM_WIDTH, 0.0, 0.0),
                    Vector3::new(ROOM_WIDTH, CEILING_HEIGHT, 0.0),
                    Vector3::new(0.0, CEILING_HEIGHT, 0.0),
                ],
                material: "drywall".to_string(),
                color: WALL_COLOR.to_string(),
            },
            Wall3D {
                points: [
                    Vector3::new(0.0, 0.0, 0.0),
                    Vector3::new(0.0, 0.0, ROOM_DEPTH),
                    Vector3::new(0.0, CEILING_HEIGHT, ROOM_DEPTH),
                    Vector3::new(0.0, CEILING_HEIGHT, 0.0),
                ],
                material: "drywall".to_string(),
                color: WALL_COLOR.to_string(),
            },
        ],
        floor: Floor3D {
            material: floor_material.to_string(),
            color: floor_color.to_string(),
            area: ROOM_WIDTH * ROOM_DEPTH,
        },
        ceiling: Ceiling3D {
            height: CEILING_HEIGHT,
            material: "plaster".to_string(),
            color: "#FFFFFF".to_string(),
        },
        windows: vec![Opening3D {
            position: Vector3::new(2.5, 1.5, 0.0),
            dimensions: Dimensions {
                width: 1.5,
                height: 1.2,
                depth: 0.1,
            },
            style: "double_hung".to_string(),
        }],
        doors: vec![Opening3D {
            position: Vector3::new(0.0, 1.05, 2.0),
            dimensions: Dimensions {
                width: 0.9,
                height: 2.1,
                depth: 0.05,
            },
            style: "panel".to_string(),
        }],
        lighting: vec![Light3D {
            light_type: "pendant".to_string(),
            position: Vector3::new(2.5, 2.8, 2.0),
            intensity: 0.8,
            color: "#FFF8E7".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_shape_is_fixed() {
        let model = build_room_model(RoomType::Bedroom);
        assert_eq!(model.walls.len(), 2);
        assert_eq!(model.windows.len(), 1);
        assert_eq!(model.doors.len(), 1);
        assert_eq!(model.lighting.len(), 1);
        assert_eq!(model.floor.area, 20.0);
    }

    #[test]
    fn kitchen_gets_tile_floor() {
        let kitchen = build_room_model(RoomType::Kitchen);
        assert_eq!(kitchen.floor.material, "tile");
        assert_eq!(kitchen.floor.color, "#D3D3D3");

        for other in [RoomType::LivingRoom, RoomType::Office, RoomType::Unknown] {
            let model = build_room_model(other);
            assert_eq!(model.floor.material, "hardwood");
            assert_eq!(model.floor.color, "#8B4513");
        }
    }

    #[test]
    fn only_floor_varies_by_room_type() {
        let mut kitchen = build_room_model(RoomType::Kitchen);
        let living = build_room_model(RoomType::LivingRoom);
        kitchen.floor = living.floor.clone();
        assert_eq!(kitchen, living);
    }

    #[test]
    fn building_twice_is_identical() {
        assert_eq!(build_room_model(RoomType::Kitchen), build_room_model(RoomType::Kitchen));
    }
}
