// src/services/suggestions.rs
use crate::models::{ColorSuggestion, FurnitureSuggestion, Room3DModel, RoomType};
use crate::services::colors::generate_colors;
use crate::services::furniture::generate_furniture;
use crate::services::random::RandomSource;
use crate::services::room_model::build_room_model;

/// The three generators the orchestrator fans out to once a room is admitted.
pub trait SuggestionGenerator: Send + Sync {
    fn room_model(&self, room_type: RoomType) -> Room3DModel;

    fn furniture(
        &self,
        room_type: RoomType,
        count: usize,
        random: &dyn RandomSource,
    ) -> Vec<FurnitureSuggestion>;

    fn colors(
        &self,
        room_type: RoomType,
        count: usize,
        random: &dyn RandomSource,
    ) -> Vec<ColorSuggestion>;
}

/// Generators backed by the static catalogs.
pub struct CatalogGenerator;

impl SuggestionGenerator for CatalogGenerator {
    fn room_model(&self, room_type: RoomType) -> Room3DModel {
        build_room_model(room_type)
    }

    fn furniture(
        &self,
        room_type: RoomType,
        count: usize,
        random: &dyn RandomSource,
    ) -> Vec<FurnitureSuggestion> {
        generate_furniture(room_type, count, random)
    }

    fn colors(
        &self,
        room_type: RoomType,
        count: usize,
        random: &dyn RandomSource,
    ) -> Vec<ColorSuggestion> {
        generate_colors(room_type, count, random)
    }
}
