use std::path::PathBuf;

use glam::Vec3;

use group_maker::grouping::{make_group_parent, GroupConfiguration, PivotMode};
use group_maker::host::SceneHost;
use group_maker::scene_graph::{ObjectKind, Scene};

const TWO_TABLES: &str = r#"{
    "asset": { "version": "2.0" },
    "scene": 0,
    "scenes": [{ "name": "Furniture", "nodes": [0, 1, 2] }],
    "nodes": [
        { "name": "Table", "mesh": 0, "translation": [2.0, 0.0, 0.0] },
        { "name": "Table", "mesh": 0, "translation": [-2.0, 0.0, 0.0], "scale": [1.0, 1.0, 2.0] },
        { "name": "Lamp", "translation": [0.0, 0.0, 5.0], "children": [3] },
        { "name": "Shade", "mesh": 0, "translation": [0.0, 0.0, 1.0] }
    ],
    "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
    "buffers": [{
        "byteLength": 96,
        "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
    }],
    "bufferViews": [{ "buffer": 0, "byteLength": 96 }],
    "accessors": [{
        "bufferView": 0,
        "componentType": 5126,
        "count": 8,
        "type": "VEC3",
        "min": [-0.5, -0.5, 0.0],
        "max": [0.5, 0.5, 1.0]
    }]
}"#;

fn write_fixture(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("group-maker-{}-{}.gltf", name, std::process::id()));
    std::fs::write(&path, TWO_TABLES).unwrap();
    path
}

#[test]
fn import_builds_hierarchy_and_collection() {
    let path = write_fixture("hierarchy");
    let mut scene = Scene::new();
    let roots = scene.import_gltf(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(roots.len(), 3);
    assert_eq!(scene.objects.len(), 4);

    let furniture = scene.get_collection_by_name("Furniture").unwrap();
    assert_eq!(scene.get_collection(furniture).unwrap().object_ids.len(), 4);

    let lamp = scene.get_object_by_name("Lamp").unwrap();
    assert!(matches!(scene.get_object(lamp).unwrap().kind, ObjectKind::Empty(_)));
    assert!(scene.get_object(lamp).unwrap().local_bounds.is_none());

    let shade = scene.get_object_by_name("Shade").unwrap();
    assert_eq!(scene.get_object(shade).unwrap().parent_id, Some(lamp));
    assert!(scene
        .world_translation(shade)
        .abs_diff_eq(Vec3::new(0.0, 0.0, 6.0), 1e-6));

    // Duplicate node names are made unique.
    assert!(scene.get_object_by_name("Table.001").is_some());
}

#[test]
fn imported_roots_group_at_bottom_center() {
    let path = write_fixture("group");
    let mut scene = Scene::new();
    let roots = scene.import_gltf(&path).unwrap();
    std::fs::remove_file(&path).ok();

    scene.select(&roots, None);
    let config = GroupConfiguration {
        pivot_mode: PivotMode::BoundsBottom,
        full_parenting: true,
        ..Default::default()
    };
    let report = make_group_parent(&mut scene, &config).unwrap();

    // Tables span x in [-2.5, 2.5] and z in [0, 2]; the lamp origin sits at z = 5.
    assert!(report
        .transform
        .location
        .abs_diff_eq(Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert_eq!(report.reparented.len(), 3);

    let furniture = scene.get_collection_by_name("Furniture").unwrap();
    assert_eq!(scene.object_collections(report.group), vec![furniture]);
}

#[test]
fn missing_file_is_an_error() {
    let mut scene = Scene::new();
    let result = scene.import_gltf("does/not/exist.gltf");
    assert!(result.is_err());
}
