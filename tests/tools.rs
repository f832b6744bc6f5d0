use std::collections::BTreeSet;
use std::fs;

use ogr_tools::config::{self, USE_SELECTED};
use ogr_tools::uri::{ogr_layer_name, INVALID_LAYER_ID};
use ogr_tools::vector::{
    features, unique_values, values, Defn, FeatureRequest, FieldType, FieldValue, LayerAccess,
    MemoryLayer, RequestFlags, SelectionContext,
};

fn points() -> MemoryLayer {
    let mut layer = MemoryLayer::new(
        "points",
        Defn::from_fields(&[("id", FieldType::Integer), ("id_2", FieldType::Integer)]),
    );
    for (id, id_2) in (1..=8_i32).zip([2, 1, 0, 2, 1, 0, 0, 0]) {
        let point = geo_types::Geometry::Point(geo_types::Point::new(f64::from(id), 0.0));
        layer
            .add_feature(Some(point), vec![Some(id.into()), Some(FieldValue::IntegerValue(id_2))])
            .unwrap();
    }
    layer
}

fn fids<L: LayerAccess>(layer: &L, request: &FeatureRequest) -> BTreeSet<u64> {
    let ctx = SelectionContext::from_config().unwrap();
    features(layer, &ctx, request).unwrap().map(|f| f.fid()).collect()
}

#[test]
fn test_ogr_layer_name() {
    let tmpdir = tempfile::tempdir().unwrap();
    let uri = tmpdir.path().to_string_lossy().into_owned();

    fs::write(tmpdir.path().join("a.csv"), "id\n1\n").unwrap();
    assert_eq!(ogr_layer_name(&uri), "a");

    fs::write(tmpdir.path().join("b.csv"), "id\n2\n").unwrap();
    assert_eq!(ogr_layer_name(&format!("{uri}|layerid=0")), "a");
    assert_eq!(ogr_layer_name(&format!("{uri}|layerid=1")), "b");
    assert_eq!(ogr_layer_name(&format!("{uri}|layerid=2")), INVALID_LAYER_ID);

    assert_eq!(ogr_layer_name(&format!("{uri}|layername=f")), "f");
    assert_eq!(ogr_layer_name(&format!("{uri}|layerid=0|layername=f2")), "f2");
    assert_eq!(ogr_layer_name(&format!("{uri}|layername=f2|layerid=0")), "f2");

    assert_eq!(
        ogr_layer_name(r#"dbname='/tmp/x.sqlite' table="t" (geometry) sql="#),
        "t"
    );
    assert_eq!(
        ogr_layer_name(
            r#"port=5493 sslmode=disable key='edge_id' srid=0 type=LineString table="city_data"."edge" (geom) sql="#
        ),
        "city_data.edge"
    );
}

// The toggle lives in the process-wide option store, so every scenario that
// flips it runs sequentially inside this one test.
#[test]
fn test_selection_toggle() {
    let all: BTreeSet<u64> = (0..8).collect();
    let selected = BTreeSet::from([2, 4, 6]);
    let mut layer = points();

    config::clear_config_option(USE_SELECTED).unwrap();
    assert_eq!(fids(&layer, &FeatureRequest::new()), all);

    config::set_config_option(USE_SELECTED, "YES").unwrap();
    layer.select_by_ids([2, 4, 6]);
    assert_eq!(fids(&layer, &FeatureRequest::new()), selected);

    config::set_config_option(USE_SELECTED, "NO").unwrap();
    assert_eq!(fids(&layer, &FeatureRequest::new()), all);

    config::set_config_option(USE_SELECTED, "YES").unwrap();
    layer.remove_selection();
    assert_eq!(fids(&layer, &FeatureRequest::new()), all);

    config::set_config_option(USE_SELECTED, "NO").unwrap();
    let request = FeatureRequest::new().with_filter_fids([1, 3, 5]);
    assert_eq!(fids(&layer, &request), BTreeSet::from([1, 3, 5]));

    config::set_config_option(USE_SELECTED, "YES").unwrap();
    layer.select_by_ids([2, 4, 6]);
    let request = FeatureRequest::new().with_flags(RequestFlags::NO_GEOMETRY);
    let ctx = SelectionContext::from_config().unwrap();
    assert!(features(&layer, &ctx, &request)
        .unwrap()
        .all(|f| !f.has_geometry()));
    assert_eq!(fids(&layer, &request), selected);

    // A captured context is unaffected by later changes to the option.
    config::set_config_option(USE_SELECTED, "NO").unwrap();
    let ids: BTreeSet<i32> = values(&layer, &ctx, ["id"])
        .unwrap()
        .get("id")
        .unwrap()
        .iter()
        .map(|v| v.clone().and_then(FieldValue::into_int).unwrap())
        .collect();
    assert_eq!(ids, BTreeSet::from([3, 5, 7]));

    let unique = unique_values(&layer, &ctx, "id_2").unwrap();
    assert_eq!(unique.len(), 2);
    assert!(unique.contains(&Some(FieldValue::IntegerValue(0))));
    assert!(unique.contains(&Some(FieldValue::IntegerValue(1))));

    config::clear_config_option(USE_SELECTED).unwrap();
}
