// tests/projector.rs
//
// Search + sort over loaded records, no UI.

use peloton_board::loader::{Record, parse_records};
use peloton_board::view::{
    SortDirection, SortSpec, View, column_named, compare_records, matches_search, project,
};

fn rec(pairs: &[(&str, &str)]) -> Record {
    pairs.iter().copied().collect()
}

fn names<'a>(view: &View<'a>) -> Vec<&'a str> {
    view.iter().map(|r| r.get("Name").unwrap_or("?")).collect()
}

fn arr_board() -> Vec<Record> {
    vec![
        rec(&[("Name", "ten"), ("ARR", "10")]),
        rec(&[("Name", "two"), ("ARR", "2")]),
        rec(&[("Name", "abc"), ("ARR", "abc")]),
        rec(&[("Name", "blank"), ("ARR", "")]),
    ]
}

#[test]
fn numeric_sort_treats_junk_as_zero_and_stays_stable() {
    let records = arr_board();
    let view = View::new(&records, "", &SortSpec::ascending("ARR"));
    assert_eq!(names(&view), ["abc", "blank", "two", "ten"]);
}

#[test]
fn numeric_sort_is_not_lexicographic() {
    let records = vec![
        rec(&[("Name", "a"), ("Total", "100")]),
        rec(&[("Name", "b"), ("Total", "9")]),
        rec(&[("Name", "c"), ("Total", "25.5")]),
    ];
    let view = View::new(&records, "", &SortSpec::descending("Total"));
    assert_eq!(names(&view), ["a", "c", "b"]);
}

#[test]
fn absent_numeric_cell_sorts_as_zero() {
    let records = vec![
        rec(&[("Name", "has"), ("GC", "3")]),
        rec(&[("Name", "missing")]),
        rec(&[("Name", "neg"), ("GC", "-1")]),
    ];
    let view = View::new(&records, "", &SortSpec::ascending("GC"));
    assert_eq!(names(&view), ["neg", "missing", "has"]);
}

#[test]
fn equal_keys_keep_input_order_both_directions() {
    let records = vec![
        rec(&[("Name", "first"), ("Stage", "5")]),
        rec(&[("Name", "top"), ("Stage", "9")]),
        rec(&[("Name", "second"), ("Stage", "5")]),
        rec(&[("Name", "third"), ("Stage", "5.0")]),
    ];
    let asc = View::new(&records, "", &SortSpec::ascending("Stage"));
    assert_eq!(names(&asc), ["first", "second", "third", "top"]);

    let desc = View::new(&records, "", &SortSpec::descending("Stage"));
    assert_eq!(names(&desc), ["top", "first", "second", "third"]);
}

#[test]
fn name_sorts_as_text() {
    let records = vec![
        rec(&[("Name", "bravo")]),
        rec(&[("Name", "Alpha")]),
        rec(&[("Name", "alpha")]),
    ];
    let view = View::new(&records, "", &SortSpec::ascending("Name"));
    // Uppercase sorts before lowercase.
    assert_eq!(names(&view), ["Alpha", "alpha", "bravo"]);
}

#[test]
fn absent_name_sorts_as_empty_text() {
    let records = vec![
        rec(&[("Name", "bravo")]),
        rec(&[("#", "7")]),
        rec(&[("Name", "Alpha")]),
    ];
    let asc = View::new(&records, "", &SortSpec::ascending("Name"));
    assert_eq!(names(&asc), ["?", "Alpha", "bravo"]);

    let desc = View::new(&records, "", &SortSpec::descending("Name"));
    assert_eq!(names(&desc), ["bravo", "Alpha", "?"]);
}

#[test]
fn column_names_resolve_ignoring_case() {
    assert_eq!(column_named("total"), Some("Total"));
    assert_eq!(column_named("RACE DAYS"), Some("Race Days"));
    assert_eq!(column_named("#"), Some("#"));
    assert_eq!(column_named("Totl"), None);
    assert_eq!(column_named(""), None);
}

#[test]
fn descending_is_reverse_of_ascending_for_distinct_values() {
    let records = arr_board()[..2].to_vec();
    let mut spec = SortSpec::ascending("ARR");
    let asc = project(&records, "", &spec);

    spec.toggle("ARR");
    assert_eq!(spec.direction, SortDirection::Descending);
    let mut desc = project(&records, "", &spec);
    desc.reverse();
    assert_eq!(asc, desc);

    spec.toggle("ARR");
    assert_eq!(project(&records, "", &spec), asc);
}

#[test]
fn toggle_rule() {
    let mut spec = SortSpec::default();
    assert_eq!(spec, SortSpec::ascending("#"));

    spec.toggle("#");
    assert_eq!(spec, SortSpec::descending("#"));

    // New column always starts ascending.
    spec.toggle("Total");
    assert_eq!(spec, SortSpec::ascending("Total"));
}

#[test]
fn search_matches_name_case_insensitively() {
    let r = rec(&[("Name", "Jonas Vingegaard"), ("ARR", "1450")]);
    assert!(matches_search(&r, "vin"));
    assert!(matches_search(&r, "VIN"));
    assert!(matches_search(&r, ""));
    assert!(!matches_search(&r, "999"));
    assert!(matches_search(&r, "45"));

    let lucky = rec(&[("Name", "Someone"), ("ARR", "9990")]);
    assert!(matches_search(&lucky, "999"));
}

#[test]
fn search_never_matches_absent_fields() {
    let r = rec(&[("#", "1")]);
    assert!(!matches_search(&r, "1"));
}

#[test]
fn search_does_not_look_at_other_columns() {
    let r = rec(&[("Name", "Wout"), ("ARR", "800"), ("Total", "123")]);
    assert!(!matches_search(&r, "123"));
}

#[test]
fn filter_then_sort_with_counts() {
    let records = vec![
        rec(&[("Name", "Tadej"), ("ARR", "900")]),
        rec(&[("Name", "Jonas"), ("ARR", "700")]),
        rec(&[("Name", "Tom"), ("ARR", "90")]),
    ];
    let view = View::new(&records, "t", &SortSpec::ascending("ARR"));
    assert_eq!(names(&view), ["Tom", "Tadej"]);
    assert_eq!(view.counts(), (2, 3));
    assert_eq!(view.summary(), "Showing 2 of 3 entries");
}

#[test]
fn compare_records_respects_direction() {
    use std::cmp::Ordering;
    let a = rec(&[("ARR", "1")]);
    let b = rec(&[("ARR", "2")]);
    assert_eq!(compare_records(&a, &b, &SortSpec::ascending("ARR")), Ordering::Less);
    assert_eq!(compare_records(&a, &b, &SortSpec::descending("ARR")), Ordering::Greater);
}

#[test]
fn end_to_end_sample() {
    let text = "Title Row\n\n#,Name,ARR,Race Days,Stage,Classics,GC,Total\n1,A,500,10,1,0,2,3\n2,B,700,8,0,1,1,2\n";
    let records = parse_records("overall-points.csv", text.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);

    let view = View::new(&records, "", &SortSpec::descending("ARR"));
    assert_eq!(names(&view), ["B", "A"]);
    assert_eq!(view.summary(), "Showing 2 of 2 entries");
}
