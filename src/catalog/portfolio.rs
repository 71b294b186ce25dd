use glam::Vec3;

use super::{Backdrop, ModelEntry, ModelKind, ModelProfile, TransformOverride};

/// Built-in project models, in carousel order.
pub(super) fn entries() -> Vec<ModelEntry> {
    vec![
        ModelEntry::new(
            "/models/logo-sweet-spot.glb",
            "Sweet Spot, FEB 2025 - MAR 2025\n\
             \u{2022} Ticket office website with Next.js and TypeScript\n\
             \u{2022} User data and ticket storage with Supabase\n\
             \u{2022} Expo app to scan tickets\n\
             \u{2022} 3D replica of a Dolby Atmos studio with Three.js\n\
             \u{2022} Transactional email management with Resend",
        )
        .with_url("https://sweetspot.paris")
        .with_profile(ModelProfile {
            // Sits beside the ring instead of on it.
            transform: TransformOverride {
                anchor: Some(Vec3::new(-2.01, 0.0, -0.02)),
                offset: Vec3::new(0.0, -0.14, 0.0),
                yaw_offset_deg: -88.0,
                ..TransformOverride::default()
            },
            backdrop: Backdrop::Solid {
                color: [0.0, 0.0, 0.0],
            },
            ..ModelProfile::default()
        }),
        ModelEntry::new(
            "/models/camera.glb",
            "Mathieu Le Gal, MAR 2025 - APR 2025\n\
             \u{2022} Portfolio website for Mathieu Le Gal\n\
             \u{2022} Tools used: TypeScript, Next.js, Three.js, Tailwind",
        )
        .with_url("https://mathieulegal.com")
        .with_profile(ModelProfile {
            kind: ModelKind::Featured,
            transform: TransformOverride {
                offset: Vec3::new(0.0, -0.2, 0.0),
                yaw_offset_deg: 90.0,
                scale_multiplier: 4.0,
                ..TransformOverride::default()
            },
            backdrop: Backdrop::Video {
                source: "/images/mathieuLg/texture_noir.mp4".to_owned(),
            },
        }),
        ModelEntry::new(
            "/models/3Dchably.glb",
            "Maison Mine, JAN 2025 - FEB 2025\n\
             \u{2022} Website for the Maison Mine company\n\
             \u{2022} Tools used: TypeScript, Next.js, Three.js, Tailwind, \
             Sanity CMS",
        )
        .with_url("https://maisonmine.com")
        .with_profile(ModelProfile {
            transform: TransformOverride {
                scale_multiplier: 0.9,
                ..TransformOverride::default()
            },
            ..ModelProfile::default()
        }),
    ]
}
