//! Selector engine integration tests

use dcma_selection::{
    metadata, select, select_by_metadata, Contour, ContourCollection, DynamicState, ImageArray,
    LineSample, MissingKeyPolicy, PlanarImage, PointCloud, SelectionError, SelectorOptions,
    SparseTable, StaticState, SurfaceMesh, Transform, TransformKind, TreatmentPlan, Validation,
};
use proptest::prelude::*;
use rstest::rstest;

fn image_array(modalities: &[&str]) -> ImageArray {
    ImageArray::new(
        modalities
            .iter()
            .map(|m| PlanarImage::with_metadata([("Modality", *m)]))
            .collect(),
    )
}

fn cloud(id: usize, points: usize) -> PointCloud {
    PointCloud::new(
        vec![[0.0, 0.0, 0.0]; points],
        metadata([("id", id.to_string())]),
    )
}

fn ids(selected: &[&PointCloud]) -> Vec<usize> {
    selected
        .iter()
        .filter_map(|c| c.metadata.get("id"))
        .filter_map(|id| id.parse().ok())
        .collect()
}

fn opts() -> SelectorOptions {
    SelectorOptions::default()
}

// === Positional ===

#[rstest]
#[case("all", vec![0, 1, 2, 3])]
#[case("none", vec![])]
#[case("first", vec![0])]
#[case("second", vec![1])]
#[case("third", vec![2])]
#[case("last", vec![3])]
#[case("!first", vec![1, 2, 3])]
#[case("!third", vec![0, 1, 3])]
#[case("!last", vec![0, 1, 2])]
#[case("!none", vec![0, 1, 2, 3])]
#[case("#0", vec![0])]
#[case("#2", vec![2])]
#[case("#-0", vec![3])]
#[case("#-1", vec![2])]
#[case("!#1", vec![0, 2, 3])]
#[case("!#-3", vec![1, 2, 3])]
#[case("#4", vec![])]
#[case("!#4", vec![0, 1, 2, 3])]
#[case("#-4", vec![])]
#[case("!#-4", vec![0, 1, 2, 3])]
fn test_positional_selectors(#[case] specifier: &str, #[case] expected: Vec<usize>) {
    let clouds: Vec<PointCloud> = (0..4).map(|i| cloud(i, 1)).collect();
    let selected = select(clouds.iter().collect(), specifier, &opts()).unwrap();
    assert_eq!(ids(&selected), expected);
}

#[test]
fn test_positional_on_empty_sequence() {
    let empty: Vec<&PointCloud> = Vec::new();
    for specifier in ["first", "!first", "last", "!last", "#0", "#-0", "!#-0", "numerous"] {
        assert!(select(empty.clone(), specifier, &opts()).unwrap().is_empty());
    }
}

#[test]
fn test_inverting_first_twice() {
    let clouds: Vec<PointCloud> = (0..4).map(|i| cloud(i, 1)).collect();
    let once = select(clouds.iter().collect(), "!first", &opts()).unwrap();
    let twice = select(once, "!first", &opts()).unwrap();
    assert_eq!(ids(&twice), vec![2, 3]);
}

// === Intrinsic ===

#[rstest]
#[case("more-than(3)", vec![2])]
#[case("fewer-than(3)", vec![0])]
#[case("!more-than(3)", vec![0, 1])]
#[case("!fewer-than(3)", vec![1, 2])]
#[case("more-than(-1)", vec![0, 1, 2])]
#[case("numerous", vec![2])]
#[case("fewest", vec![0])]
#[case("!numerous", vec![0, 1])]
#[case("!fewest", vec![1, 2])]
fn test_intrinsic_selectors(#[case] specifier: &str, #[case] expected: Vec<usize>) {
    let clouds = [cloud(0, 1), cloud(1, 3), cloud(2, 5)];
    let selected = select(clouds.iter().collect(), specifier, &opts()).unwrap();
    assert_eq!(ids(&selected), expected);
}

#[test]
fn test_sub_element_counts_per_kind() {
    let meshes = [
        SurfaceMesh::new(vec![[0.0; 3]; 3], vec![vec![0, 1, 2]], metadata([("id", "small")])),
        SurfaceMesh::new(vec![[0.0; 3]; 4], vec![vec![0, 1, 2], vec![1, 2, 3]], metadata([("id", "big")])),
    ];
    let chosen = select(meshes.iter().collect(), "more-than(4)", &opts()).unwrap();
    assert_eq!(chosen.len(), 1);
    assert!(std::ptr::eq(chosen[0], &meshes[1]));

    let plan = |beams: &[usize]| {
        TreatmentPlan::new(
            beams
                .iter()
                .enumerate()
                .map(|(i, n)| DynamicState {
                    beam_number: i as i64,
                    static_states: vec![StaticState::default(); *n],
                })
                .collect(),
            metadata([("Modality", "RTPLAN")]),
        )
    };
    let plans = [plan(&[2, 2]), plan(&[3])];
    let chosen = select(plans.iter().collect(), "numerous", &opts()).unwrap();
    assert!(std::ptr::eq(chosen[0], &plans[0]));

    let samples = [
        LineSample::new(vec![[0.0; 4]; 10], metadata([("a", "b")])),
        LineSample::new(vec![[0.0; 4]; 2], metadata([("a", "b")])),
    ];
    let chosen = select(samples.iter().collect(), "fewest", &opts()).unwrap();
    assert!(std::ptr::eq(chosen[0], &samples[1]));

    let ccs = [
        ContourCollection::new(vec![Contour::default(); 2]),
        ContourCollection::new(vec![Contour::default(); 1]),
    ];
    let chosen = select(ccs.iter().collect(), "fewer-than(2)", &opts()).unwrap();
    assert!(std::ptr::eq(chosen[0], &ccs[1]));
}

#[rstest]
#[case("numerous")]
#[case("!fewest")]
#[case("more-than(0)")]
#[case("!fewer-than(10)")]
fn test_intrinsics_unsupported_for_transforms_and_tables(#[case] specifier: &str) {
    let transforms = [Transform::new(
        TransformKind::Affine([[0.0; 4]; 4]),
        metadata([("a", "b")]),
    )];
    match select(transforms.iter().collect(), specifier, &opts()) {
        Err(SelectionError::UnsupportedIntrinsic { kind }) => {
            assert_eq!(kind.to_string(), "transformation")
        }
        other => panic!("Expected unsupported intrinsic, got {:?}", other),
    }

    let tables = [SparseTable::default()];
    assert!(matches!(
        select(tables.iter().collect(), specifier, &opts()),
        Err(SelectionError::UnsupportedIntrinsic { .. })
    ));
}

// === Metadata ===

#[test]
fn test_key_value_regex_is_case_insensitive_and_anchored() {
    let ias = [image_array(&["CT"]), image_array(&["MR"]), image_array(&["CTX"])];
    let chosen = select(ias.iter().collect(), "Modality@ct", &opts()).unwrap();
    assert_eq!(chosen.len(), 1);
    assert!(std::ptr::eq(chosen[0], &ias[0]));

    let chosen = select(ias.iter().collect(), "Modality@ct.*", &opts()).unwrap();
    assert_eq!(chosen.len(), 2);

    let chosen = select(ias.iter().collect(), "Modality@^(?!CT).*$", &opts()).unwrap();
    assert_eq!(chosen.len(), 1);
    assert!(std::ptr::eq(chosen[0], &ias[1]));
}

#[test]
fn test_key_missing() {
    let ias = [
        image_array(&["CT"]),
        ImageArray::new(vec![PlanarImage::with_metadata([("SeriesNumber", "4")])]),
        ImageArray::default(),
    ];
    let chosen = select(ias.iter().collect(), "keymissing@Modality", &opts()).unwrap();
    assert_eq!(chosen.len(), 1);
    assert!(std::ptr::eq(chosen[0], &ias[1]));
}

#[test]
fn test_pedantic_requires_every_value() {
    let mixed = image_array(&["CT", "MR"]);
    let pure = image_array(&["CT", "CT"]);
    let candidates = vec![&mixed, &pure];

    let representative = select(candidates.clone(), "Modality@CT", &opts()).unwrap();
    assert_eq!(representative.len(), 2);

    let pedantic = SelectorOptions::new().with_validation(Validation::Pedantic);
    let chosen = select(candidates, "Modality@CT", &pedantic).unwrap();
    assert_eq!(chosen.len(), 1);
    assert!(std::ptr::eq(chosen[0], &pure));
}

#[rstest]
#[case(MissingKeyPolicy::Include, ".*CT.*", 2)]
#[case(MissingKeyPolicy::Exclude, ".*CT.*", 1)]
#[case(MissingKeyPolicy::TreatAsEmpty, ".*CT.*", 1)]
#[case(MissingKeyPolicy::TreatAsEmpty, "(CT)?", 2)]
fn test_missing_key_policy(
    #[case] nas: MissingKeyPolicy,
    #[case] regex: &str,
    #[case] expected: usize,
) {
    let with = image_array(&["CT"]);
    let without = ImageArray::new(vec![PlanarImage::new(512, 512)]);

    for validation in [Validation::Representative, Validation::Pedantic] {
        let options = SelectorOptions::new().with_validation(validation).with_nas(nas);
        let chosen = select_by_metadata(vec![&with, &without], "Modality", regex, &options).unwrap();
        assert_eq!(chosen.len(), expected, "{:?} {:?}", validation, nas);
    }
}

#[test]
fn test_contour_metadata_uses_first_contour() {
    let ccs = [ContourCollection::new(vec![
        Contour::with_metadata([("ROIName", "Body")]),
        Contour::with_metadata([("ROIName", "Skin")]),
    ])];
    assert_eq!(select(ccs.iter().collect(), "ROIName@body", &opts()).unwrap().len(), 1);
    assert!(select(ccs.iter().collect(), "ROIName@skin", &opts()).unwrap().is_empty());
}

// === Chaining ===

#[test]
fn test_chaining_is_ordered() {
    let ias = [image_array(&["MR"]), image_array(&["CT"]), image_array(&["CT"])];
    let all: Vec<&ImageArray> = ias.iter().collect();

    let ct_then_first = select(all.clone(), "Modality@CT;first", &opts()).unwrap();
    assert_eq!(ct_then_first.len(), 1);
    assert!(std::ptr::eq(ct_then_first[0], &ias[1]));

    let first_then_ct = select(all.clone(), "first;Modality@CT", &opts()).unwrap();
    assert!(first_then_ct.is_empty());

    let nested = select(select(all, "Modality@CT", &opts()).unwrap(), "last", &opts()).unwrap();
    assert!(std::ptr::eq(nested[0], &ias[2]));
}

#[rstest]
#[case("#99999999999999999999", 0)]
#[case("#-99999999999999999999", 0)]
#[case("!#99999999999999999999", 3)]
#[case("!#-99999999999999999999", 3)]
fn test_oversized_index_is_out_of_range(#[case] specifier: &str, #[case] expected: usize) {
    let clouds = [cloud(0, 1), cloud(1, 2), cloud(2, 3)];
    let kept = select(clouds.iter().collect(), specifier, &opts()).unwrap();
    assert_eq!(kept.len(), expected);
}

// === Errors ===

#[rstest]
#[case("bogus-token")]
#[case("")]
#[case("first;")]
#[case("a@b@c")]
#[case("#x")]
#[case("more-than(1.5)")]
#[case("fewest(3)")]
fn test_invalid_specifiers(#[case] specifier: &str) {
    let clouds = [cloud(0, 1)];
    assert!(matches!(
        select(clouds.iter().collect(), specifier, &opts()),
        Err(SelectionError::InvalidSpecifier(_))
    ));
}

// === Properties ===

proptest! {
    #[test]
    fn test_all_and_none(sizes in prop::collection::vec(0usize..20, 0..12)) {
        let clouds: Vec<PointCloud> = sizes.iter().enumerate().map(|(i, n)| cloud(i, *n)).collect();
        let all: Vec<&PointCloud> = clouds.iter().collect();

        let kept = select(all.clone(), "all", &opts()).unwrap();
        prop_assert_eq!(ids(&kept), ids(&all));
        prop_assert!(select(all, "none", &opts()).unwrap().is_empty());
    }

    #[test]
    fn test_index_zero_and_last(sizes in prop::collection::vec(0usize..20, 0..12)) {
        let clouds: Vec<PointCloud> = sizes.iter().enumerate().map(|(i, n)| cloud(i, *n)).collect();
        let all: Vec<&PointCloud> = clouds.iter().collect();

        let front = select(all.clone(), "#0", &opts()).unwrap();
        let back = select(all.clone(), "#-0", &opts()).unwrap();
        prop_assert_eq!(ids(&front), ids(&all).into_iter().take(1).collect::<Vec<_>>());
        prop_assert_eq!(ids(&back), ids(&all).last().copied().into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_threshold_partitions(sizes in prop::collection::vec(0usize..20, 0..12), n in -2i64..22) {
        let clouds: Vec<PointCloud> = sizes.iter().enumerate().map(|(i, k)| cloud(i, *k)).collect();
        let all: Vec<&PointCloud> = clouds.iter().collect();

        let more = select(all.clone(), &format!("more-than({})", n), &opts()).unwrap();
        let not_more = select(all.clone(), &format!("!more-than({})", n), &opts()).unwrap();
        prop_assert_eq!(more.len() + not_more.len(), all.len());
        prop_assert!(more.iter().all(|c| c.points.len() as i64 > n));

        let fewer = select(all.clone(), &format!("fewer-than({})", n), &opts()).unwrap();
        prop_assert!(fewer.iter().all(|c| (c.points.len() as i64) < n));
        prop_assert!(more.iter().all(|m| !fewer.iter().any(|f| std::ptr::eq(*m, *f))));
    }

    #[test]
    fn test_inverted_index_is_complement(sizes in prop::collection::vec(0usize..5, 0..10), n in 0usize..12) {
        let clouds: Vec<PointCloud> = sizes.iter().enumerate().map(|(i, k)| cloud(i, *k)).collect();
        let all: Vec<&PointCloud> = clouds.iter().collect();

        for index_form in [format!("#{}", n), format!("#-{}", n)] {
            let kept = select(all.clone(), &index_form, &opts()).unwrap();
            let dropped = select(all.clone(), &format!("!{}", index_form), &opts()).unwrap();
            prop_assert!(kept.len() <= 1);
            prop_assert_eq!(kept.len() + dropped.len(), all.len());
        }
    }
}
