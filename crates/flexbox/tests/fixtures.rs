//! JSON fixtures: container + items + intrinsic sizes in, expected frames out.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, ensure};
use flexbox_layout::{
    EngineConfig, FlexContainer, FlexEngine, FlexItem, IntrinsicMeasurer, MeasureSpec,
    Measurement, Rect, Size,
};
use log::info;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Fixture {
    name: String,
    #[serde(default)]
    container: FlexContainer,
    #[serde(default)]
    width: MeasureSpec,
    #[serde(default)]
    height: MeasureSpec,
    items: Vec<FlexItem>,
    intrinsic: Vec<Measurement>,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    #[serde(default)]
    display_order: Option<Vec<usize>>,
    index_to_line: Vec<usize>,
    frames: Vec<Rect>,
    content_size: Size,
}

fn fixture_paths() -> Result<Vec<PathBuf>> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|found| found.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    Ok(paths)
}

fn run_fixture(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let fixture: Fixture =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!("fixture: {}", fixture.name);

    let engine = FlexEngine::new(EngineConfig::new(true));
    let mut measurer = IntrinsicMeasurer::new(fixture.intrinsic);
    let layout = engine
        .layout(
            &fixture.container,
            &fixture.items,
            fixture.width,
            fixture.height,
            &mut measurer,
        )
        .with_context(|| format!("layout of '{}'", fixture.name))?;

    let frames: Vec<Rect> = layout.items.iter().map(|item| item.frame).collect();
    ensure!(
        frames == fixture.expected.frames,
        "'{}': frames {:?} != expected {:?}",
        fixture.name,
        frames,
        fixture.expected.frames
    );
    ensure!(
        layout.index_to_line == fixture.expected.index_to_line,
        "'{}': index_to_line {:?} != expected {:?}",
        fixture.name,
        layout.index_to_line,
        fixture.expected.index_to_line
    );
    ensure!(
        layout.content_size == fixture.expected.content_size,
        "'{}': content size {:?} != expected {:?}",
        fixture.name,
        layout.content_size,
        fixture.expected.content_size
    );
    if let Some(order) = &fixture.expected.display_order {
        ensure!(
            &layout.display_order == order,
            "'{}': display order {:?} != expected {:?}",
            fixture.name,
            layout.display_order,
            order
        );
    }
    ensure!(
        layout.check_invariants(&fixture.items),
        "'{}': invariant check failed",
        fixture.name
    );
    Ok(())
}

#[test]
/// # Errors
/// Returns an error naming the first fixture whose layout differs from its expectation.
fn fixtures_match_expected_layout() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let paths = fixture_paths()?;
    ensure!(!paths.is_empty(), "no fixtures found");
    for path in &paths {
        run_fixture(path)?;
    }
    Ok(())
}
