use blockyard_core::{GroundPlane, RenderFrame, VoxelColor, VoxelInstance};
use macroquad::prelude::*;

pub const SKY_COLOR: Color = Color::from_rgba(135, 206, 235, 255);
pub const GROUND_COLOR: Color = Color::from_rgba(0, 128, 0, 255);
pub const HOVER_COLOR: Color = Color::from_rgba(169, 169, 169, 178);
pub const PLAYER_COLOR: Color = Color::from_rgba(255, 0, 0, 128);
const EDGE_COLOR: Color = Color::from_rgba(0, 0, 0, 96);
const CROSSHAIR_SIZE: f32 = 8.0;

pub fn voxel_color(color: VoxelColor) -> Color {
    match color {
        VoxelColor::Red => Color::from_rgba(255, 0, 0, 255),
        VoxelColor::Blue => Color::from_rgba(0, 0, 255, 255),
        VoxelColor::Green => Color::from_rgba(0, 128, 0, 255),
        VoxelColor::Yellow => Color::from_rgba(255, 255, 0, 255),
    }
}

pub fn instance_color(instance: &VoxelInstance) -> Color {
    if instance.hovered {
        HOVER_COLOR
    } else {
        voxel_color(instance.color)
    }
}

pub fn draw_ground(ground: &GroundPlane) {
    let half = ground.half_extent();
    draw_plane(vec3(0.0, ground.height, 0.0), vec2(half, half), None, GROUND_COLOR);
}

pub fn draw_voxels(frame: &RenderFrame) {
    for instance in &frame.voxels {
        let center = Vec3::from_array(instance.cell.center());
        draw_cube(center, Vec3::ONE, None, instance_color(instance));
        draw_cube_wires(center, Vec3::ONE, EDGE_COLOR);
    }
}

/// Drawn last among the 3D passes so the translucent box blends over the scene.
pub fn draw_player(frame: &RenderFrame) {
    draw_cube(
        Vec3::from_array(frame.player_position),
        Vec3::from_array(frame.player_extents),
        None,
        PLAYER_COLOR,
    );
}

pub fn draw_crosshair() {
    let center_x = screen_width() / 2.0;
    let center_y = screen_height() / 2.0;
    draw_line(
        center_x - CROSSHAIR_SIZE,
        center_y,
        center_x + CROSSHAIR_SIZE,
        center_y,
        2.0,
        WHITE,
    );
    draw_line(
        center_x,
        center_y - CROSSHAIR_SIZE,
        center_x,
        center_y + CROSSHAIR_SIZE,
        2.0,
        WHITE,
    );
}

pub fn draw_hud(frame: &RenderFrame, pointer_locked: bool, fps: f32) {
    draw_text(&format!("tick: {}", frame.tick), 20.0, 40.0, 24.0, WHITE);
    draw_text(
        &format!("blocks: {}", frame.voxels.len()),
        20.0,
        64.0,
        24.0,
        WHITE,
    );
    let [x, y, z] = frame.player_position;
    draw_text(
        &format!("player: {:.1}, {:.1}, {:.1}", x, y, z),
        20.0,
        88.0,
        24.0,
        WHITE,
    );
    draw_text(&format!("fps: {:.1}", fps), 20.0, 112.0, 24.0, WHITE);

    let hint = if pointer_locked {
        "click: place  alt+click: remove  esc: release mouse"
    } else {
        "click to look around"
    };
    draw_text(hint, 20.0, screen_height() - 24.0, 24.0, WHITE);
}
