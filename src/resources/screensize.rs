use bevy_ecs::prelude::Resource;

/// Internal render resolution in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}
