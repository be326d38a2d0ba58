//! A stand-in for the external render driver: builds a small scene,
//! spins it for a few frames, and "renders" by logging what a real
//! backend would upload and draw.
//!
//! Run with `RUST_LOG=debug cargo run --example orbiting_shapes` to see
//! the buffer-regeneration logging from the kernel itself.

use prism::prelude::*;

/// A graphics backend that only remembers how much it was asked to upload.
struct LoggingBackend {
    next_handle: u32,
}

impl GraphicsBackend for LoggingBackend {
    type Buffer = u32;

    fn upload_buffer(&mut self, data: &[f32]) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        log::info!("upload: buffer #{handle} ({} floats)", data.len());
        handle
    }
}

fn build_scene() -> Result<Scene> {
    let mut scene = Scene::new();

    scene.add(
        Object::new(generate_box(), Material::Uniform([0.8, 0.2, 0.2]))?
            .with_position([-2.0, 0.0, 0.0]),
    );

    scene.add(
        Object::with_normal_mode(
            generate_sphere(20),
            Material::Uniform([0.2, 0.6, 0.9]),
            NormalMode::Smooth,
        )?
        .with_position([2.0, 0.0, 0.0]),
    );

    // A cone-on-icosahedron hierarchy: rotating the group spins both.
    let mut lander = Group::new().with_position([0.0, 1.0, -2.0]);
    lander.add_child(
        Object::with_normal_mode(
            generate_cone(16, 1.0, 0.6),
            Material::Uniform([0.9, 0.8, 0.2]),
            NormalMode::Smooth,
        )?
        .with_position([0.0, 0.5, 0.0]),
    );
    lander.add_child(
        Object::new(generate_icosahedron(), Material::Uniform([0.6, 0.6, 0.6]))?
            .with_scale([0.5, 0.5, 0.5]),
    );
    scene.add(lander);

    Ok(scene)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut scene = build_scene()?;
    let mut backend = LoggingBackend { next_handle: 0 };

    // Upload static geometry once; transforms never invalidate it.
    for node in &scene {
        if let Some(object) = node.as_object() {
            upload_object(&mut backend, object);
        }
    }

    let mut camera = Camera::new();
    camera.set_position([0.0, 3.0, 8.0]);
    camera.look_at([0.0, 0.5, 0.0]);
    let projection = Mat4::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);

    for frame in 0..3 {
        // The driver owns animation: nudge every top-level node per frame.
        for node in scene.iter_mut() {
            if let Some(object) = node.as_object_mut() {
                object.rotation[1] += 2.0;
            } else if let Some(group) = node.as_group_mut() {
                group.rotation[1] += 5.0;
            }
        }

        let view_projection = camera.matrix().multiply(&projection);
        for (i, command) in scene.draw_commands().iter().enumerate() {
            let clip = command.transform.multiply(&view_projection);
            let origin = clip.transform_point([0.0, 0.0, 0.0]);
            log::info!(
                "frame {frame}, draw {i}: {:?}, lit={}, origin at ({:.2}, {:.2}, {:.2})",
                command.mode,
                command.is_lit(),
                origin[0],
                origin[1],
                origin[2]
            );
        }
    }

    Ok(())
}
