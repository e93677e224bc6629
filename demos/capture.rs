use earclip_rs::{deviation, Region};
use std::fs;

fn main() {
    let s = fs::read_to_string("./tests/fixtures/capture.json").unwrap();
    let vertices = serde_json::from_str::<Vec<[f64; 2]>>(&s).unwrap();

    let mut region = Region::new(vertices);
    let triangles = region.triangles().unwrap().to_vec();
    println!("{} vertices -> {} triangles", region.vertices().len(), triangles.len());
    for [a, b, c] in region.fill().unwrap() {
        println!("  {:?} {:?} {:?}", a, b, c);
    }
    println!(
        "deviation: {}",
        deviation(region.vertices().iter().copied(), &triangles)
    );
}
