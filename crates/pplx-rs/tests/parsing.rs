//! Integration tests for reading documents back into an entity tree.

use pplx_rs::model::enums::{
    ConstructionGrade, CrossarmMaterial, InsulatorType, PoleClass, SpanType, TensionType,
    WoodSpecies,
};
use pplx_rs::model::{Crossarm, Insulator, LoadCase, Notes, Scene, Span, WoodPole};
use pplx_rs::{
    EntityTree, NodeId, Provenance, ReadOptions, ValueTable, WriteOptions, attribute_records,
    load_document, load_document_from_str, save_document, save_document_to_string,
    save_document_with,
};
use tempfile::tempdir;

/// Builds Scene -> WoodPole -> Crossarm -> Insulator -> (Span, Notes), plus a
/// LoadCase under the scene.
fn sample_tree() -> EntityTree {
    let mut tree = EntityTree::new(Scene {
        name: "Main St & 5th".to_string(),
        job_number: "J-2024-017".to_string(),
        latitude: 35.2271,
        longitude: -80.8431,
        elevation: Some(751.0),
    });
    let root = tree.root();

    let load_case = tree.insert(LoadCase {
        grade: ConstructionGrade::C,
        ..LoadCase::default()
    });
    let pole = tree.insert(WoodPole {
        pole_number: "P-1042".to_string(),
        species: WoodSpecies::DouglasFir,
        class: PoleClass::Class2,
        length: 540.0,
        ground_line_circumference: Some(41.25),
        year_installed: 1987,
        existing: false,
        strength_derating: ValueTable::with_points("Strength", vec![(0.0, 1.0), (120.0, 0.85)]),
        ..WoodPole::default()
    });
    let arm = tree.insert(Crossarm {
        material: CrossarmMaterial::Steel,
        double_arm: true,
        ..Crossarm::default()
    });
    let insulator = tree.insert(Insulator {
        insulator_type: InsulatorType::DeadEnd,
        offset_y: -12.5,
        ..Insulator::default()
    });
    let span = tree.insert(Span {
        span_type: SpanType::Service,
        tension_type: TensionType::Slack,
        conductor: "1/0 ACSR \"Raven\"".to_string(),
        sag_curve: ValueTable::with_points("Sag", vec![(32.0, 14.5), (120.0, 22.0)]),
        ..Span::default()
    });
    let note = tree.insert(Notes {
        text: "Clearance < 18' over drive; verify & report".to_string(),
        author: "inspector".to_string(),
    });

    tree.add_child(root, load_case).unwrap();
    tree.add_child(root, pole).unwrap();
    tree.add_child(pole, arm).unwrap();
    tree.add_child(arm, insulator).unwrap();
    tree.add_child(insulator, span).unwrap();
    tree.add_child(insulator, note).unwrap();
    tree
}

fn tags(tree: &EntityTree) -> Vec<&'static str> {
    tree.depth_first()
        .into_iter()
        .map(|id| tree.entity(id).unwrap().xml_key())
        .collect()
}

/// Asserts both trees have the same shape and per-node attribute records.
fn assert_same_tree(expected: &EntityTree, actual: &EntityTree) {
    assert_eq!(tags(expected), tags(actual));
    let left = expected.depth_first();
    let right = actual.depth_first();
    for (&a, &b) in left.iter().zip(right.iter()) {
        assert_eq!(
            attribute_records(expected.entity(a).unwrap()),
            attribute_records(actual.entity(b).unwrap()),
            "records differ for {}",
            expected.entity(a).unwrap().xml_key()
        );
        assert_eq!(expected.children(a).len(), actual.children(b).len());
    }
}

fn find_first<T: pplx_rs::Schema>(tree: &EntityTree) -> (NodeId, &T) {
    tree.depth_first()
        .into_iter()
        .find_map(|id| tree.get::<T>(id).map(|entity| (id, entity)))
        .expect("entity type should be present")
}

#[test]
fn test_file_round_trip() {
    env_logger::try_init().ok(); // Ignore error if already initialized
    let dir = tempdir().unwrap();
    let path = dir.path().join("pole.pplx");
    let tree = sample_tree();

    save_document(&path, &tree).unwrap();
    let document = load_document(&path, &ReadOptions::default()).unwrap();

    assert_same_tree(&tree, &document.tree);
    assert_eq!(
        tags(&document.tree),
        [
            "Scene",
            "LoadCase",
            "WoodPole",
            "Crossarm",
            "Insulator",
            "Span",
            "Notes"
        ]
    );
    // System provenance always supplies a date.
    assert!(document.provenance.date.is_some());
}

#[test]
fn test_loaded_values_are_typed() {
    let xml = save_document_to_string(
        &sample_tree(),
        &WriteOptions::default(),
        &Provenance::default(),
    )
    .unwrap();
    let document = load_document_from_str(&xml, &ReadOptions::default()).unwrap();
    let tree = &document.tree;

    let scene = tree.get::<Scene>(tree.root()).unwrap();
    assert_eq!(scene.name, "Main St & 5th");
    assert_eq!(scene.elevation, Some(751.0));
    assert_eq!(scene.longitude, -80.8431);

    let (pole_id, pole) = find_first::<WoodPole>(tree);
    assert_eq!(pole.species, WoodSpecies::DouglasFir);
    assert_eq!(pole.class, PoleClass::Class2);
    assert_eq!(pole.ground_line_circumference, Some(41.25));
    assert_eq!(pole.tip_circumference, None);
    assert_eq!(pole.year_installed, 1987);
    assert!(!pole.existing);
    assert_eq!(
        pole.strength_derating,
        ValueTable::with_points("Strength", vec![(0.0, 1.0), (120.0, 0.85)])
    );
    assert_eq!(tree.parent(pole_id), Some(tree.root()));

    let (_, span) = find_first::<Span>(tree);
    assert_eq!(span.span_type, SpanType::Service);
    assert_eq!(span.tension_type, TensionType::Slack);
    assert_eq!(span.conductor, "1/0 ACSR \"Raven\"");
    assert_eq!(span.sag_curve.len(), 2);

    let (_, note) = find_first::<Notes>(tree);
    assert_eq!(note.text, "Clearance < 18' over drive; verify & report");

    let (_, load_case) = find_first::<LoadCase>(tree);
    assert_eq!(load_case.grade, ConstructionGrade::C);
}

#[test]
fn test_loaded_tree_keeps_enforcing_legality() {
    let xml = save_document_to_string(
        &sample_tree(),
        &WriteOptions::default(),
        &Provenance::default(),
    )
    .unwrap();
    let mut tree = load_document_from_str(&xml, &ReadOptions::default())
        .unwrap()
        .tree;

    let (span_id, _) = find_first::<Span>(&tree);
    let pole = tree.insert(WoodPole::default());
    assert!(tree.add_child(span_id, pole).is_err());

    let (insulator_id, _) = find_first::<Insulator>(&tree);
    let extra = tree.insert(Span::default());
    tree.add_child(insulator_id, extra).unwrap();
    assert_eq!(tree.children(insulator_id).len(), 3);
}

#[test]
fn test_provenance_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stamped.pplx");
    let stamps = Provenance {
        date: Some("2023-11-30T16:45:10".to_string()),
        user: Some("O'Brien & Sons".to_string()),
        workstation: None,
    };

    save_document_with(&path, &sample_tree(), &WriteOptions::default(), &stamps).unwrap();
    let document = load_document(&path, &ReadOptions::default()).unwrap();

    assert_eq!(document.provenance, stamps);
}

#[test]
fn test_reads_compact_output() {
    let options = WriteOptions {
        indent: 0,
        stamp_provenance: false,
    };
    let tree = sample_tree();
    let xml = save_document_to_string(&tree, &options, &Provenance::default()).unwrap();
    assert_eq!(xml.lines().count(), 1);

    let document = load_document_from_str(&xml, &ReadOptions::default()).unwrap();
    assert_same_tree(&tree, &document.tree);
    assert_eq!(document.provenance, Provenance::default());
}

#[test]
fn test_missing_values_keep_defaults() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<PPL>
  <Scene>
    <ATTRIBUTES>
      <VALUE NAME="Scene Name" TYPE="String">Sparse</VALUE>
    </ATTRIBUTES>
    <PPLChildElements>
      <WoodPole/>
      <LoadCase>
        <ATTRIBUTES/>
      </LoadCase>
    </PPLChildElements>
  </Scene>
</PPL>"#;

    let tree = load_document_from_str(xml, &ReadOptions::default())
        .unwrap()
        .tree;
    assert_eq!(tree.get::<Scene>(tree.root()).unwrap().name, "Sparse");
    assert_eq!(tree.get::<Scene>(tree.root()).unwrap().elevation, None);

    let (_, pole) = find_first::<WoodPole>(&tree);
    assert_eq!(pole, &WoodPole::default());
    let (_, load_case) = find_first::<LoadCase>(&tree);
    assert_eq!(load_case, &LoadCase::default());
}

#[test]
fn test_enum_accepts_display_text_or_member_name() {
    let xml = r#"<PPL>
  <Scene>
    <PPLChildElements>
      <WoodPole>
        <ATTRIBUTES>
          <VALUE NAME="Species" TYPE="String">Western Larch</VALUE>
          <VALUE NAME="Class" TYPE="Enum">ClassH2</VALUE>
        </ATTRIBUTES>
      </WoodPole>
      <WoodPole>
        <ATTRIBUTES>
          <VALUE NAME="Species" TYPE="String">RedPine</VALUE>
          <VALUE NAME="Class">7</VALUE>
        </ATTRIBUTES>
      </WoodPole>
    </PPLChildElements>
  </Scene>
</PPL>"#;

    let tree = load_document_from_str(xml, &ReadOptions::default())
        .unwrap()
        .tree;
    let poles: Vec<&WoodPole> = tree
        .children(tree.root())
        .iter()
        .map(|&id| tree.get::<WoodPole>(id).unwrap())
        .collect();

    assert_eq!(poles[0].species, WoodSpecies::WesternLarch);
    assert_eq!(poles[0].class, PoleClass::ClassH2);
    assert_eq!(poles[1].species, WoodSpecies::RedPine);
    // A missing TYPE is read as String, i.e. display text.
    assert_eq!(poles[1].class, PoleClass::Class7);
}

#[test]
fn test_garbage_table_text_is_tolerated() {
    let xml = r#"<PPL>
  <Scene>
    <PPLChildElements>
      <WoodPole>
        <ATTRIBUTES>
          <VALUE NAME="Strength Derating" TYPE="String">Strength;0,1;bogus;x,y;90,0.7;</VALUE>
        </ATTRIBUTES>
      </WoodPole>
    </PPLChildElements>
  </Scene>
</PPL>"#;

    let options = ReadOptions {
        strict_attributes: true,
        ..ReadOptions::default()
    };
    let tree = load_document_from_str(xml, &options).unwrap().tree;
    let (_, pole) = find_first::<WoodPole>(&tree);
    assert_eq!(
        pole.strength_derating,
        ValueTable::with_points("Strength", vec![(0.0, 1.0), (90.0, 0.7)])
    );
}
