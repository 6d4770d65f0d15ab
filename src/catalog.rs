use crate::models::{Operation, Property, PropertyType};
use once_cell::sync::Lazy;

static LISTINGS: Lazy<Vec<Property>> = Lazy::new(build_listings);

/// The compiled-in investment catalog, in display order
pub fn listings() -> &'static [Property] {
    &LISTINGS
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_listings() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            title: "Yucalpetén Resort Marina".to_string(),
            operation: Operation::Sale,
            property_type: PropertyType::Apartment,
            zone: "Yucalpetén, Progreso".to_string(),
            price: 2_850_000,
            bedrooms: 2,
            bathrooms: 2,
            area_sqm: 98,
            parking_spots: 1,
            tag: "Fractional Disponible".to_string(),
            description: "El nuevo epicentro de lujo frente al mar en Yucatán. Marina privada, amenidades nivel resort y alta plusvalía.".to_string(),
            features: strings(&["Marina Privada", "Nivel Resort", "Modelo Fractional", "Alta Plusvalía"]),
            image_url: "https://images.unsplash.com/photo-1571003123894-1f0594d2b5d9?auto=format&fit=crop&q=90&w=1200".to_string(),
        },
        Property {
            id: 2,
            title: "Acceso a Oportunidades".to_string(),
            operation: Operation::Sale,
            property_type: PropertyType::Apartment,
            zone: "Riviera Maya / Mérida".to_string(),
            price: 3_200_000,
            bedrooms: 1,
            bathrooms: 1,
            area_sqm: 72,
            parking_spots: 1,
            tag: "Preventas Exclusivas".to_string(),
            description: "Proyectos internacionales y opciones exclusivas fuera de mercado. Diversifica tu capital en moneda fuerte.".to_string(),
            features: strings(&["Opciones Exclusivas", "Ticket en Dólares", "Plusvalía", "Acompañamiento Legal"]),
            image_url: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&q=90&w=1200".to_string(),
        },
        Property {
            id: 3,
            title: "Playa del Carmen Luxury".to_string(),
            operation: Operation::Sale,
            property_type: PropertyType::Studio,
            zone: "Playa del Carmen, Centro".to_string(),
            price: 1_950_000,
            bedrooms: 1,
            bathrooms: 1,
            area_sqm: 45,
            parking_spots: 1,
            tag: "Fractional / ROI Elevado".to_string(),
            description: "Estudios y departamentos en el corazón de Playa. Perfectos para renta vacacional y flujo de efectivo.".to_string(),
            features: strings(&["Cerca de 5a Av.", "Rooftop Pool", "Flujo de Efectivo", "Administración Pro"]),
            image_url: "https://images.unsplash.com/photo-1613553507447-557ff688f8ca?auto=format&fit=crop&q=90&w=1200".to_string(),
        },
        Property {
            id: 4,
            title: "Tulum Selva Maya".to_string(),
            operation: Operation::Sale,
            property_type: PropertyType::Penthouse,
            zone: "Tulum, Aldea Zama".to_string(),
            price: 4_100_000,
            bedrooms: 3,
            bathrooms: 3,
            area_sqm: 160,
            parking_spots: 2,
            tag: "Entrega Inmediata".to_string(),
            description: "Penthouse con alberca privada inmerso en la selva. Diseño biofílico y alta demanda turística.".to_string(),
            features: strings(&["Alberca Privada", "Diseño Biofílico", "Zona Premium", "Seguridad 24/7"]),
            image_url: "https://images.unsplash.com/photo-1582407947304-fd86f028f716?auto=format&fit=crop&q=90&w=1200".to_string(),
        },
        Property {
            id: 5,
            title: "Residencial en Mérida".to_string(),
            operation: Operation::Sale,
            property_type: PropertyType::House,
            zone: "Mérida, Norte".to_string(),
            price: 5_500_000,
            bedrooms: 4,
            bathrooms: 4,
            area_sqm: 280,
            parking_spots: 3,
            tag: "Plusvalía Garantizada".to_string(),
            description: "Casas residenciales en la zona de mayor crecimiento de Mérida. Seguridad, paz y patrimonio sólido.".to_string(),
            features: strings(&["Zona Norte", "Club House", "Seguridad 24/7", "Alta Plusvalía"]),
            image_url: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&q=90&w=1200".to_string(),
        },
        Property {
            id: 6,
            title: "Puerto Progreso Mar".to_string(),
            operation: Operation::Sale,
            property_type: PropertyType::Apartment,
            zone: "Progreso, Malecón".to_string(),
            price: 2_900_000,
            bedrooms: 3,
            bathrooms: 2,
            area_sqm: 110,
            parking_spots: 2,
            tag: "Frente al Mar".to_string(),
            description: "Departamentos con vista espectacular al Golfo de México. Cerca del nuevo puerto y amenidades.".to_string(),
            features: strings(&["Vista al Mar", "Malecón", "Inversión Segura", "Terraza"]),
            image_url: "https://images.unsplash.com/photo-1520454125516-134a66d6bd78?auto=format&fit=crop&q=90&w=1200".to_string(),
        },
    ]
}
