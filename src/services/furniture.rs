// src/services/furniture.rs
use crate::models::{FurnitureCategory, FurnitureSuggestion, Position3D, RoomType, Vector3};
use crate::services::catalog::{furniture_catalog, CatalogItem};
use crate::services::random::RandomSource;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Places an item in the synthetic room by category. Chairs and decor fan out
/// along x by list index; everything else has a single fixed spot, so two
/// tables in one list share the same position.
pub fn position_for(category: FurnitureCategory, index: usize) -> Position3D {
    let offset = index as f64;
    let (x, y, z, rotation) = match category {
        FurnitureCategory::Sofa => (0.0, 0.0, -2.0, Vector3::default()),
        FurnitureCategory::Table => (0.0, 0.0, 0.0, Vector3::default()),
        FurnitureCategory::Chair => {
            let rotation = Vector3::new(0.0, -FRAC_PI_4, 0.0);
            (1.5 + offset * 0.5, 0.0, 1.0, rotation)
        }
        FurnitureCategory::Lighting => (-2.5, 0.0, -2.5, Vector3::default()),
        FurnitureCategory::Bed => (0.0, 0.0, -1.5, Vector3::default()),
        FurnitureCategory::Storage => (-3.0, 0.0, 0.0, Vector3::new(0.0, FRAC_PI_2, 0.0)),
        FurnitureCategory::Decor => (-1.0 + offset * 0.3, 1.5, -2.9, Vector3::default()),
    };
    Position3D { x, y, z, rotation }
}

fn suggestion_from(item: &CatalogItem, index: usize, compatibility: f64) -> FurnitureSuggestion {
    FurnitureSuggestion {
        id: format!("furniture_{}", index + 1),
        name: item.name.to_string(),
        category: item.category,
        brand: item.brand.to_string(),
        price: item.price,
        image_url: item.image_url.to_string(),
        model_url: item.model_url.map(str::to_string),
        dimensions: item.dimensions,
        material: item.material.to_string(),
        color: item.color.to_string(),
        style: item.style.iter().map(|s| s.to_string()).collect(),
        availability: item.availability,
        tags: item.tags.iter().map(|s| s.to_string()).collect(),
        position_3d: position_for(item.category, index),
        compatibility,
    }
}

/// First `count` catalog entries for the room type, in catalog order, each
/// with a compatibility score in `[85, 100)`.
pub fn generate_furniture(
    room_type: RoomType,
    count: usize,
    random: &dyn RandomSource,
) -> Vec<FurnitureSuggestion> {
    furniture_catalog(room_type)
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, item)| suggestion_from(item, index, 85.0 + random.next_f64() * 15.0))
        .collect()
}
