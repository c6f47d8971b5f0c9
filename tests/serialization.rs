//! JSON round trips of the tessellator configuration.

#![forbid(unsafe_code)]

use adaptive_tessellation::prelude::*;
use proptest::prelude::*;

#[test]
fn default_config_round_trips() {
    let config = TessellatorConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: TessellatorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn missing_fields_take_defaults() {
    let config: TessellatorConfig = serde_json::from_str(r#"{"maximum_number_of_subdivisions": 7}"#).unwrap();
    assert_eq!(config.maximum_number_of_subdivisions, 7);
    assert_eq!(config.embedding, EmbeddingConfig::default());

    let empty: TessellatorConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, TessellatorConfig::default());
}

#[test]
fn deserialized_layouts_are_clamped() {
    let layout: VertexLayout = serde_json::from_str(r#"{"embedding_dimension": 40, "field_size": 2}"#).unwrap();
    assert_eq!(layout, VertexLayout::new(MAX_EMBEDDING_DIMENSION, 2));
    assert_eq!(layout.point_dimension(), 3 + MAX_EMBEDDING_DIMENSION + 2);
}

#[test]
fn a_loaded_config_drives_the_tessellator() {
    let json = r#"{
        "maximum_number_of_subdivisions": 2,
        "embedding": { "layouts": [
            { "embedding_dimension": 0, "field_size": 0 },
            { "embedding_dimension": 0, "field_size": 1 },
            { "embedding_dimension": 0, "field_size": 1 },
            { "embedding_dimension": 0, "field_size": 1 }
        ] }
    }"#;
    let config: TessellatorConfig = serde_json::from_str(json).unwrap();
    let mut tessellator: AdaptiveTessellator<AlwaysSubdivide, f64, Vec<f64>> =
        AdaptiveTessellator::from_config(AlwaysSubdivide, config);
    tessellator.set_edge_callback(|a, b, _, fields: &mut Vec<f64>, _| fields.extend([a[3], b[3]]));

    tessellator
        .adaptively_sample_edge(&[0.0, 0.0, 0.0, 0.0], &[1.0, 0.0, 0.0, 8.0])
        .unwrap();
    assert_eq!(tessellator.private_data(), &vec![0.0, 2.0, 2.0, 4.0, 4.0, 6.0, 6.0, 8.0]);
}

proptest! {
    /// Property: any configuration reachable through the setters survives a JSON round trip.
    #[test]
    fn prop_config_json_roundtrip(
        depth in 0_u32..16,
        settings in prop::collection::vec((-1_i32..=3, 0_i32..12, 0_i32..24), 0..6),
    ) {
        let mut config = TessellatorConfig { maximum_number_of_subdivisions: depth, ..TessellatorConfig::default() };
        for (order, dimension, size) in settings {
            config.embedding.set_embedding_dimension(order, dimension);
            config.embedding.set_field_size(order, size);
        }
        let json = serde_json::to_string(&config).unwrap();
        let back: TessellatorConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, config);
    }
}
