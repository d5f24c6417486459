//! Window configuration for the desktop app.

use std::env;

use app::APP_NAME;
use app::config_file::load_config_or_default;
use app::seed::resolve_launch_options;
use macroquad::window::Conf;
use maze_core::SimConfig;

/// Config for this process, read once before the window opens.
pub fn launch_config() -> SimConfig {
    let args: Vec<String> = env::args().collect();
    launch_config_from_args(&args)
}

/// Seed and argument errors are ignored here and reported by the main loop.
pub fn launch_config_from_args(args: &[String]) -> SimConfig {
    let config_path = resolve_launch_options(args, 0).ok().and_then(|options| options.config_path);
    load_config_or_default(config_path.as_deref())
}

/// Top-down panel on the left, first-person strips on the right.
pub fn build_window_conf(config: &SimConfig) -> Conf {
    let view_right = config.view_panel_x + f64::from(config.view_ray_count);
    let width = view_right.max(f64::from(config.play_area_width));
    let height = (config.view_center_y * 2.0).max(f64::from(config.play_area_height));
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: width.ceil() as i32,
        window_height: height.ceil() as i32,
        window_resizable: false,
        ..Default::default()
    }
}
