//! End-to-end scenarios through the public [`Generator`] API.
//!
//! Most shapes are kept short and coarse, since booleans grow quadratically
//! with face count. The default vase runs at its real size.

#![allow(clippy::unwrap_used)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use vesselgen::operations::query::IsValid;
use vesselgen::params::{CrossSectionKind, SurfaceStyle};
use vesselgen::{
    BinaryStl, GenerationRequest, Generator, LampParameters, LampPart, ShapeParameters,
    TriangleBuffer,
};

const FAMILIES: [CrossSectionKind; 13] = [
    CrossSectionKind::Circle,
    CrossSectionKind::Oval,
    CrossSectionKind::Squircle,
    CrossSectionKind::Superellipse,
    CrossSectionKind::Heart,
    CrossSectionKind::Teardrop,
    CrossSectionKind::Petal,
    CrossSectionKind::Leaf,
    CrossSectionKind::Polygon,
    CrossSectionKind::Star,
    CrossSectionKind::Gear,
    CrossSectionKind::Flower,
    CrossSectionKind::Unknown,
];

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn vase(cross_section: CrossSectionKind) -> ShapeParameters {
    ShapeParameters {
        height: 10.0,
        base_diameter: 24.0,
        resolution: 16,
        twist_angle: 45.0,
        cross_section,
        ..ShapeParameters::default()
    }
}

fn lamp(cross_section: CrossSectionKind) -> LampParameters {
    let lamp = LampParameters::default();
    LampParameters {
        base: ShapeParameters {
            height: 14.0,
            base_diameter: 40.0,
            resolution: 16,
            cross_section,
            ..lamp.base
        },
        shade: ShapeParameters {
            height: 12.0,
            base_diameter: 30.0,
            resolution: 16,
            cross_section,
            ..lamp.shade
        },
        ..lamp
    }
}

// ── Every family ──

#[test]
fn vases_of_every_family_are_finite() {
    init_tracing();
    let generator = Generator::new();
    for family in FAMILIES {
        for style in [SurfaceStyle::Smooth, SurfaceStyle::Ridged, SurfaceStyle::Finned] {
            let request = GenerationRequest::Vase(ShapeParameters {
                style,
                ..vase(family)
            });
            let buffer = generator.preview(&request).unwrap();
            assert!(!buffer.is_empty(), "{family:?} {style:?}");
            assert!(buffer.is_finite(), "{family:?} {style:?}");
        }
    }
}

#[test]
fn lamp_parts_of_every_family_are_finite() {
    init_tracing();
    let generator = Generator::new();
    for family in FAMILIES {
        for part in [LampPart::Base, LampPart::Shade] {
            let request = GenerationRequest::Lamp {
                parameters: lamp(family),
                part,
            };
            let buffer = generator.preview(&request).unwrap();
            assert!(!buffer.is_empty(), "{family:?} {part:?}");
            assert!(buffer.is_finite(), "{family:?} {part:?}");
        }
    }
}

#[test]
fn combined_lamp_is_finite() {
    let generator = Generator::new();
    for family in [CrossSectionKind::Circle, CrossSectionKind::Heart, CrossSectionKind::Star] {
        let request = GenerationRequest::Lamp {
            parameters: lamp(family),
            part: LampPart::Combined,
        };
        let buffer = generator.preview(&request).unwrap();
        assert!(!buffer.is_empty());
        assert!(buffer.is_finite());
    }
}

// ── Default scenario ──

#[test]
fn default_vase_is_watertight_and_grows_with_resolution() {
    init_tracing();
    let generator = Generator::new();
    let params = ShapeParameters {
        height: 150.0,
        base_diameter: 80.0,
        wall_thickness: 1.6,
        cross_section: CrossSectionKind::Circle,
        twist_angle: 0.0,
        ..ShapeParameters::default()
    };
    let counts: Vec<usize> = [32, 64, 128]
        .into_iter()
        .map(|resolution| {
            let request = GenerationRequest::Vase(params.with_resolution(resolution));
            let solid = generator.solid(&request).unwrap();
            assert!(IsValid::new(&solid).execute(), "resolution {resolution}");
            let buffer = TriangleBuffer::from(&solid);
            assert!(buffer.is_finite());
            buffer.triangle_count()
        })
        .collect();
    assert!(counts[0] > 0);
    assert!(counts[0] < counts[1] && counts[1] < counts[2], "{counts:?}");
}

#[test]
fn wire_channel_changes_base_mesh() {
    let generator = Generator::new();
    let count = |wire_channel| {
        let request = GenerationRequest::Lamp {
            parameters: LampParameters {
                wire_channel,
                ..lamp(CrossSectionKind::Circle)
            },
            part: LampPart::Base,
        };
        generator.preview(&request).unwrap().triangle_count()
    };
    assert_ne!(count(true), count(false));
}

// ── Export ──

#[test]
fn export_regenerates_at_print_resolution() {
    init_tracing();
    let generator = Generator::new();
    let params = ShapeParameters {
        height: 4.0,
        base_diameter: 20.0,
        resolution: 16,
        ..ShapeParameters::default()
    };
    let request = GenerationRequest::Vase(params.clone());
    let stl = generator.export(&request, 16, &BinaryStl::new()).unwrap();

    let preview = generator.preview(&request).unwrap().triangle_count();
    let print = GenerationRequest::Vase(params.with_resolution(128));
    let expected = generator.preview(&print).unwrap().triangle_count();
    assert!(expected > preview);
    assert_eq!(stl.len(), 84 + 50 * expected);
}

// ── Determinism ──

#[test]
fn generation_is_deterministic() {
    let generator = Generator::new();
    let request = GenerationRequest::Vase(ShapeParameters {
        style: SurfaceStyle::Finned,
        ..vase(CrossSectionKind::Flower)
    });
    let first = generator.preview(&request).unwrap();
    let second = generator.preview(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parallel_calls_match_sequential_results() {
    let generator = Generator::new();
    let requests: Vec<GenerationRequest> = [
        CrossSectionKind::Heart,
        CrossSectionKind::Star,
        CrossSectionKind::Gear,
        CrossSectionKind::Leaf,
    ]
    .into_iter()
    .map(|family| GenerationRequest::Vase(vase(family)))
    .collect();

    let generator = &generator;
    let sequential: Vec<_> = requests
        .iter()
        .map(|r| generator.preview(r).unwrap())
        .collect();
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = requests
            .iter()
            .map(|r| scope.spawn(move || generator.preview(r).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, parallel);
}
