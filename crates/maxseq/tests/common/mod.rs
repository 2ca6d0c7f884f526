use std::{fs::File, io::BufReader, path::PathBuf};

use maxseq::{
    input::{read_paths, read_pois},
    types::{PathResult, PointOfInterest},
};

fn resource(name: &str) -> BufReader<File> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/resources");
    path.push(name);

    let file = File::open(&path).unwrap_or_else(|_| panic!("missing fixture {}", path.display()));
    BufReader::new(file)
}

pub fn pois() -> Vec<PointOfInterest> {
    read_pois(resource("pois.geojson")).unwrap()
}

pub fn paths() -> Vec<PathResult> {
    read_paths(resource("paths.geojson")).unwrap()
}
