//! Headless editor demo
//!
//! Builds the default scene, runs a few imgui frames through the editor
//! panels and resolves committed file references between frames.

mod demo_scene;

use editor::fonts::load_font;
use editor::{EditorSettings, EditorState, FrameReport, ImguiHost};
use engine::prelude::*;
use tracing::{debug, info, warn};

const FRAMES: u64 = 120;
const DISPLAY_SIZE: [f32; 2] = [1280.0, 720.0];

fn main() {
    // Initialize logging
    engine::init_logging();
    info!("Starting inspector demo");

    let settings = EditorSettings::load().unwrap_or_else(|e| {
        warn!("Failed to load editor settings: {}. Using defaults.", e);
        EditorSettings::default()
    });
    if let Err(e) = settings.assets.validate() {
        warn!(root = ?settings.assets.asset_root, error = %e, "Asset root is not usable");
    }
    let resolver = AssetResolver::new(settings.assets.clone());

    let mut imgui = imgui::Context::create();
    imgui.set_ini_filename(None);
    match load_font(&mut imgui, &settings.font) {
        Ok(Some(_)) => {}
        Ok(None) => debug!("Using the built-in imgui font"),
        Err(e) => warn!(error = %e, "Failed to load editor font, using the built-in one"),
    }
    // the atlas must be built before the first frame even without a renderer
    imgui.fonts().build_rgba32_texture();
    imgui.io_mut().display_size = DISPLAY_SIZE;

    let demo = demo_scene::build().expect("Failed to build demo scene");
    let mut scene = demo.scene;
    let mut editor = EditorState::new(settings).with_scene_settings(demo.scene_settings);
    editor.selection.select(demo.root, false);

    for _ in 0..FRAMES {
        imgui.io_mut().delta_time = 1.0 / 60.0;
        let ui = imgui.new_frame();

        let report = {
            let mut host = ImguiHost::new(ui);
            editor.draw_frame(&mut host, &mut scene)
        };
        imgui.render();

        resolve_committed_files(&resolver, &report);

        // simulate an animation system moving the cube outside the inspector
        if let Some(cube) = scene.downcast_mut::<engine::components::EntityObject>(demo.cube) {
            cube.translate(DVec3::new(0.0, 0.01, 0.0));
        }
    }

    info!(
        frames = editor.frame(),
        cached_cells = editor.cache.len(),
        reflected_types = editor.reflector().cached_types(),
        "Demo finished"
    );
}

/// Resolve file references outside the draw path
fn resolve_committed_files(resolver: &AssetResolver, report: &FrameReport) {
    for (commit, file) in report.committed_files() {
        match resolver.resolve(file) {
            Ok(path) => info!(property = commit.property, path = ?path, "Resolved file reference"),
            Err(e) => warn!(property = commit.property, file = %file, error = %e, "Could not resolve file reference"),
        }
    }
}
