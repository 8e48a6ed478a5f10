// src/services/catalog.rs
//! Static furniture catalogs and color palettes, keyed by room type.
//!
//! Only living room, bedroom and kitchen have their own tables. Every other
//! room type is served the living-room table.

use crate::models::{Availability, ColorType, Dimensions, FurnitureCategory, RoomType};

pub struct CatalogItem {
    pub name: &'static str,
    pub category: FurnitureCategory,
    pub brand: &'static str,
    pub price: f64,
    pub image_url: &'static str,
    pub model_url: Option<&'static str>,
    pub dimensions: Dimensions,
    pub material: &'static str,
    pub color: &'static str,
    pub style: &'static [&'static str],
    pub availability: Availability,
    pub tags: &'static [&'static str],
}

pub struct PaletteEntry {
    pub name: &'static str,
    pub hex: &'static str,
    pub color_type: ColorType,
    pub area: &'static str,
}

const fn dims(width: f64, height: f64, depth: f64) -> Dimensions {
    Dimensions {
        width,
        height,
        depth,
    }
}

static LIVING_ROOM_FURNITURE: &[CatalogItem] = &[
    CatalogItem {
        name: "Modular Sectional Sofa",
        category: FurnitureCategory::Sofa,
        brand: "West Elm",
        price: 2499.0,
        image_url: "/assets/furniture/modular-sectional-sofa.jpg",
        model_url: Some("/models/furniture/sectional-sofa.glb"),
        dimensions: dims(2.8, 0.85, 1.6),
        material: "Performance velvet",
        color: "Charcoal",
        style: &["modern", "contemporary"],
        availability: Availability::InStock,
        tags: &["seating", "family", "l-shaped"],
    },
    CatalogItem {
        name: "Round Marble Coffee Table",
        category: FurnitureCategory::Table,
        brand: "CB2",
        price: 649.0,
        image_url: "/assets/furniture/round-marble-coffee-table.jpg",
        model_url: Some("/models/furniture/coffee-table.glb"),
        dimensions: dims(0.9, 0.4, 0.9),
        material: "Marble and brass",
        color: "White",
        style: &["modern", "glam"],
        availability: Availability::InStock,
        tags: &["centerpiece", "surface"],
    },
    CatalogItem {
        name: "Mid-Century Accent Chair",
        category: FurnitureCategory::Chair,
        brand: "Article",
        price: 449.0,
        image_url: "/assets/furniture/mid-century-accent-chair.jpg",
        model_url: Some("/models/furniture/accent-chair.glb"),
        dimensions: dims(0.75, 0.8, 0.8),
        material: "Walnut and wool",
        color: "Mustard",
        style: &["mid-century", "retro"],
        availability: Availability::Limited,
        tags: &["seating", "accent"],
    },
    CatalogItem {
        name: "Arc Floor Lamp",
        category: FurnitureCategory::Lighting,
        brand: "Lumens",
        price: 289.0,
        image_url: "/assets/furniture/arc-floor-lamp.jpg",
        model_url: None,
        dimensions: dims(0.4, 2.0, 1.5),
        material: "Brushed steel",
        color: "Silver",
        style: &["modern", "minimalist"],
        availability: Availability::InStock,
        tags: &["reading", "ambient"],
    },
    CatalogItem {
        name: "Oak Media Console",
        category: FurnitureCategory::Storage,
        brand: "Crate & Barrel",
        price: 1199.0,
        image_url: "/assets/furniture/oak-media-console.jpg",
        model_url: Some("/models/furniture/media-console.glb"),
        dimensions: dims(1.8, 0.6, 0.45),
        material: "White oak",
        color: "Natural",
        style: &["scandinavian", "modern"],
        availability: Availability::InStock,
        tags: &["storage", "entertainment"],
    },
    CatalogItem {
        name: "Abstract Canvas Wall Art",
        category: FurnitureCategory::Decor,
        brand: "Minted",
        price: 189.0,
        image_url: "/assets/furniture/abstract-canvas-wall-art.jpg",
        model_url: None,
        dimensions: dims(1.0, 0.75, 0.04),
        material: "Canvas",
        color: "Multi",
        style: &["contemporary", "eclectic"],
        availability: Availability::InStock,
        tags: &["wall", "art"],
    },
    CatalogItem {
        name: "Hand-Woven Jute Rug",
        category: FurnitureCategory::Decor,
        brand: "Rugs USA",
        price: 329.0,
        image_url: "/assets/furniture/hand-woven-jute-rug.jpg",
        model_url: None,
        dimensions: dims(2.4, 0.01, 1.7),
        material: "Jute",
        color: "Natural",
        style: &["bohemian", "coastal"],
        availability: Availability::OutOfStock,
        tags: &["textile", "floor"],
    },
];

static BEDROOM_FURNITURE: &[CatalogItem] = &[
    CatalogItem {
        name: "Upholstered Platform Bed",
        category: FurnitureCategory::Bed,
        brand: "Castlery",
        price: 1599.0,
        image_url: "/assets/furniture/upholstered-platform-bed.jpg",
        model_url: Some("/models/furniture/platform-bed.glb"),
        dimensions: dims(1.7, 1.1, 2.2),
        material: "Linen",
        color: "Oatmeal",
        style: &["modern", "transitional"],
        availability: Availability::InStock,
        tags: &["sleep", "queen"],
    },
    CatalogItem {
        name: "Two-Drawer Nightstand",
        category: FurnitureCategory::Storage,
        brand: "IKEA",
        price: 179.0,
        image_url: "/assets/furniture/two-drawer-nightstand.jpg",
        model_url: Some("/models/furniture/nightstand.glb"),
        dimensions: dims(0.5, 0.55, 0.4),
        material: "Birch veneer",
        color: "White",
        style: &["scandinavian", "minimalist"],
        availability: Availability::InStock,
        tags: &["bedside", "storage"],
    },
    CatalogItem {
        name: "Six-Drawer Dresser",
        category: FurnitureCategory::Storage,
        brand: "West Elm",
        price: 1349.0,
        image_url: "/assets/furniture/six-drawer-dresser.jpg",
        model_url: None,
        dimensions: dims(1.5, 0.85, 0.5),
        material: "Acacia",
        color: "Walnut",
        style: &["mid-century"],
        availability: Availability::Limited,
        tags: &["storage", "clothing"],
    },
    CatalogItem {
        name: "Ceramic Table Lamp",
        category: FurnitureCategory::Lighting,
        brand: "Target Threshold",
        price: 79.0,
        image_url: "/assets/furniture/ceramic-table-lamp.jpg",
        model_url: None,
        dimensions: dims(0.35, 0.6, 0.35),
        material: "Ceramic and linen",
        color: "Sage",
        style: &["farmhouse", "transitional"],
        availability: Availability::InStock,
        tags: &["bedside", "reading"],
    },
    CatalogItem {
        name: "Bouclé Reading Chair",
        category: FurnitureCategory::Chair,
        brand: "Article",
        price: 699.0,
        image_url: "/assets/furniture/boucle-reading-chair.jpg",
        model_url: Some("/models/furniture/reading-chair.glb"),
        dimensions: dims(0.8, 0.75, 0.85),
        material: "Bouclé",
        color: "Ivory",
        style: &["contemporary", "organic"],
        availability: Availability::InStock,
        tags: &["seating", "cozy"],
    },
    CatalogItem {
        name: "Framed Botanical Prints",
        category: FurnitureCategory::Decor,
        brand: "Society6",
        price: 129.0,
        image_url: "/assets/furniture/framed-botanical-prints.jpg",
        model_url: None,
        dimensions: dims(0.5, 0.7, 0.03),
        material: "Paper and oak",
        color: "Green",
        style: &["botanical", "traditional"],
        availability: Availability::InStock,
        tags: &["wall", "art", "set-of-two"],
    },
];

static KITCHEN_FURNITURE: &[CatalogItem] = &[
    CatalogItem {
        name: "Counter-Height Bar Stool",
        category: FurnitureCategory::Chair,
        brand: "Wayfair",
        price: 149.0,
        image_url: "/assets/furniture/counter-height-bar-stool.jpg",
        model_url: Some("/models/furniture/bar-stool.glb"),
        dimensions: dims(0.45, 0.95, 0.45),
        material: "Powder-coated steel",
        color: "Black",
        style: &["industrial", "modern"],
        availability: Availability::InStock,
        tags: &["seating", "counter"],
    },
    CatalogItem {
        name: "Farmhouse Dining Table",
        category: FurnitureCategory::Table,
        brand: "Pottery Barn",
        price: 1899.0,
        image_url: "/assets/furniture/farmhouse-dining-table.jpg",
        model_url: Some("/models/furniture/dining-table.glb"),
        dimensions: dims(2.0, 0.76, 0.95),
        material: "Reclaimed pine",
        color: "Weathered brown",
        style: &["farmhouse", "rustic"],
        availability: Availability::Limited,
        tags: &["dining", "family"],
    },
    CatalogItem {
        name: "Glass Pendant Light",
        category: FurnitureCategory::Lighting,
        brand: "Schoolhouse",
        price: 349.0,
        image_url: "/assets/furniture/glass-pendant-light.jpg",
        model_url: None,
        dimensions: dims(0.3, 0.4, 0.3),
        material: "Blown glass and brass",
        color: "Clear",
        style: &["modern", "vintage"],
        availability: Availability::InStock,
        tags: &["task", "island"],
    },
    CatalogItem {
        name: "Butcher Block Kitchen Island",
        category: FurnitureCategory::Storage,
        brand: "John Boos",
        price: 2799.0,
        image_url: "/assets/furniture/butcher-block-kitchen-island.jpg",
        model_url: Some("/models/furniture/kitchen-island.glb"),
        dimensions: dims(1.5, 0.9, 0.9),
        material: "Maple",
        color: "Natural",
        style: &["traditional", "farmhouse"],
        availability: Availability::InStock,
        tags: &["prep", "storage", "workspace"],
    },
    CatalogItem {
        name: "Floating Wall Shelves",
        category: FurnitureCategory::Storage,
        brand: "IKEA",
        price: 89.0,
        image_url: "/assets/furniture/floating-wall-shelves.jpg",
        model_url: None,
        dimensions: dims(0.8, 0.04, 0.25),
        material: "Bamboo",
        color: "Natural",
        style: &["minimalist", "scandinavian"],
        availability: Availability::InStock,
        tags: &["open-storage", "wall"],
    },
    CatalogItem {
        name: "Herb Garden Planter",
        category: FurnitureCategory::Decor,
        brand: "Terrain",
        price: 59.0,
        image_url: "/assets/furniture/herb-garden-planter.jpg",
        model_url: None,
        dimensions: dims(0.6, 0.2, 0.2),
        material: "Terracotta",
        color: "Terracotta",
        style: &["rustic", "organic"],
        availability: Availability::InStock,
        tags: &["plants", "windowsill"],
    },
];

static LIVING_ROOM_PALETTE: &[PaletteEntry] = &[
    PaletteEntry {
        name: "Warm Greige",
        hex: "#D6CFC7",
        color_type: ColorType::Wall,
        area: "Main walls",
    },
    PaletteEntry {
        name: "Sage Green",
        hex: "#9CAF88",
        color_type: ColorType::Accent,
        area: "Feature wall",
    },
    PaletteEntry {
        name: "Deep Navy",
        hex: "#2C3E50",
        color_type: ColorType::Furniture,
        area: "Sofa and armchairs",
    },
    PaletteEntry {
        name: "Soft Cream",
        hex: "#F5F5DC",
        color_type: ColorType::Textile,
        area: "Curtains and cushions",
    },
];

static BEDROOM_PALETTE: &[PaletteEntry] = &[
    PaletteEntry {
        name: "Lavender Mist",
        hex: "#E6E6FA",
        color_type: ColorType::Wall,
        area: "Main walls",
    },
    PaletteEntry {
        name: "Dusty Rose",
        hex: "#D4A5A5",
        color_type: ColorType::Accent,
        area: "Headboard wall",
    },
    PaletteEntry {
        name: "Charcoal",
        hex: "#36454F",
        color_type: ColorType::Furniture,
        area: "Bed frame and dresser",
    },
    PaletteEntry {
        name: "Ivory Linen",
        hex: "#FFFFF0",
        color_type: ColorType::Textile,
        area: "Bedding",
    },
];

static KITCHEN_PALETTE: &[PaletteEntry] = &[
    PaletteEntry {
        name: "Crisp White",
        hex: "#FFFFFF",
        color_type: ColorType::Wall,
        area: "Walls and backsplash",
    },
    PaletteEntry {
        name: "Butter Yellow",
        hex: "#FFFACD",
        color_type: ColorType::Accent,
        area: "Open shelving backdrop",
    },
    PaletteEntry {
        name: "Slate Gray",
        hex: "#708090",
        color_type: ColorType::Furniture,
        area: "Lower cabinets",
    },
    PaletteEntry {
        name: "Natural Oak",
        hex: "#C19A6B",
        color_type: ColorType::Floor,
        area: "Flooring",
    },
];

pub fn furniture_catalog(room_type: RoomType) -> &'static [CatalogItem] {
    match room_type {
        RoomType::Bedroom => BEDROOM_FURNITURE,
        RoomType::Kitchen => KITCHEN_FURNITURE,
        // Bathrooms, offices, dining rooms and unknown rooms share the
        // living-room selection.
        _ => LIVING_ROOM_FURNITURE,
    }
}

pub fn color_palette(room_type: RoomType) -> &'static [PaletteEntry] {
    match room_type {
        RoomType::Bedroom => BEDROOM_PALETTE,
        RoomType::Kitchen => KITCHEN_PALETTE,
        _ => LIVING_ROOM_PALETTE,
    }
}
