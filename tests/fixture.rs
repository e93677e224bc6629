use earclip_rs::{deviation, geom, Triangulator, Winding};
use std::fs;

fn load_fixture(name: &str) -> Vec<[f64; 2]> {
    let s = fs::read_to_string("./tests/fixtures/".to_string() + name + ".json").unwrap();
    serde_json::from_str::<Vec<[f64; 2]>>(&s).unwrap()
}

fn test_fixture(name: &str, num_triangles: usize, expected_deviation: f64) {
    let data = load_fixture(name);

    let mut triangles: Vec<[u32; 3]> = vec![];
    let mut triangulator = Triangulator::new();
    triangulator
        .triangulate(data.iter().copied(), &mut triangles)
        .unwrap();

    // check
    assert_eq!(triangles.len(), num_triangles);
    assert_eq!(num_triangles, data.len() - 2);
    assert!(deviation(data.iter().copied(), &triangles) <= expected_deviation);

    let winding = Winding::of(&data);
    for &[a, b, c] in &triangles {
        let (a, b, c) = (data[a as usize], data[b as usize], data[c as usize]);
        let turn = geom::signed_turn(a, b, c);
        assert!(turn == 0.0 || Winding::of_triangle(a, b, c) == winding);
    }
}

#[test]
fn fixture_capture() {
    test_fixture("capture", 8, 0.0);
}

#[test]
fn fixture_comb() {
    test_fixture("comb", 40, 0.0);
}

#[test]
fn fixture_star() {
    test_fixture("star", 14, 0.0);
}

#[test]
fn fixture_spiral() {
    test_fixture("spiral", 14, 0.0);
}

#[test]
fn fixture_circle() {
    test_fixture("circle", 62, 1e-12);
}

#[test]
fn fixture_capture_first_ears() {
    let data = load_fixture("capture");
    let mut triangles: Vec<[usize; 3]> = vec![];
    Triangulator::new()
        .triangulate(data.iter().copied(), &mut triangles)
        .unwrap();
    assert_eq!(&triangles[..3], &[[3, 4, 5], [2, 3, 5], [2, 5, 6]]);
}
