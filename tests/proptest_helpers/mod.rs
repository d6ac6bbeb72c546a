#![allow(dead_code)]

use linkmap::marker::Marker;
use linkmap::model::{
    Area, BackgroundType, Configuration, ContainerSize, FileId, Pixel, Rect, TargetId, TargetType,
};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Tolerance for pixel -> percent -> pixel round trips, in pixels.
pub const EPS_PIXEL: f64 = 1e-6;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_container() -> impl Strategy<Value = ContainerSize> {
    (1.0f64..4000.0, 1.0f64..4000.0).prop_map(|(w, h)| ContainerSize::new(w, h))
}

/// A pixel rectangle inside `container`.
pub fn arb_pixel_rect_in(container: ContainerSize) -> impl Strategy<Value = Rect<Pixel>> {
    (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64).prop_map(move |(l, t, w, h)| {
        let left = l * container.width;
        let top = t * container.height;
        Rect::new(
            left,
            top,
            w * (container.width - left),
            h * (container.height - top),
        )
    })
}

pub fn arb_container_and_rect() -> impl Strategy<Value = (ContainerSize, Rect<Pixel>)> {
    arb_container().prop_flat_map(|container| (Just(container), arb_pixel_rect_in(container)))
}

fn arb_token() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-z]{1,4}".prop_map(Some),
        (0u64..4, "[a-z]{1,4}").prop_map(|(id, c)| Some(format!("{}:{}", id, c))),
    ]
}

fn arb_target_type() -> impl Strategy<Value = TargetType> {
    prop_oneof![
        Just(TargetType::Page),
        Just(TargetType::AudioFile),
        Just(TargetType::None),
        "[a-z_]{3,10}".prop_map(TargetType::from),
    ]
}

pub fn arb_marker() -> impl Strategy<Value = Marker> {
    prop_oneof![
        Just(Marker::NoMarker),
        Just(Marker::DynamicMarker),
        "[a-z_]{3,12}".prop_map(Marker::from),
    ]
}

pub fn arb_area() -> impl Strategy<Value = Area> {
    (
        (-20.0f64..120.0, -20.0f64..120.0, 0.0f64..100.0, 0.0f64..100.0),
        arb_target_type(),
        proptest::option::of(0u64..100),
        proptest::option::of("[a-z]{2,6}"),
        arb_marker(),
        arb_token(),
        arb_token(),
    )
        .prop_map(
            |((left, top, width, height), target_type, target_id, transition, marker, cmc, mpi)| {
                Area {
                    left,
                    top,
                    width,
                    height,
                    target_type,
                    target_id: target_id.map(TargetId),
                    page_transition: transition,
                    marker,
                    color_map_component_id: cmc,
                    mask_perma_id: mpi,
                    ..Default::default()
                }
            },
        )
}

fn arb_file_id() -> impl Strategy<Value = Option<FileId>> {
    proptest::option::of((0u64..4).prop_map(FileId))
}

pub fn arb_configuration(max_areas: usize) -> impl Strategy<Value = Configuration> {
    (
        (arb_file_id(), arb_file_id(), arb_file_id(), arb_file_id(), arb_file_id()),
        prop_oneof![
            Just(BackgroundType::Image),
            Just(BackgroundType::HoverVideo),
            Just(BackgroundType::Other("panorama".into())),
        ],
        proptest::collection::vec(arb_area(), 0..=max_areas),
    )
        .prop_map(|((hover, visited, masked_hover, masked_visited, color_map), background, areas)| {
            Configuration {
                hover_image_id: hover,
                visited_image_id: visited,
                masked_hover_image_id: masked_hover,
                masked_visited_image_id: masked_visited,
                color_map_file_id: color_map,
                background_type: background,
                areas_editable: true,
                areas,
            }
        })
}

pub fn assert_rect_close(a: &Rect<Pixel>, b: &Rect<Pixel>, eps: f64) -> Result<(), String> {
    let pairs = [
        ("left", a.left(), b.left()),
        ("top", a.top(), b.top()),
        ("width", a.width, b.width),
        ("height", a.height, b.height),
    ];
    for (name, x, y) in pairs {
        if (x - y).abs() > eps {
            return Err(format!("{} differs: {} vs {} (eps {})", name, x, y, eps));
        }
    }
    Ok(())
}
