/// An embedded WGSL program plus the binding contract the pipeline relies on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderAsset {
    pub name: &'static str,
    /// Bumped whenever the interface below changes.
    pub version: u32,
    pub source: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
    pub uniform_group: u32,
    pub uniform_binding: u32,
    pub vertex_slot: u32,
}

impl ShaderAsset {
    pub fn module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(self.name),
            source: wgpu::ShaderSource::Wgsl(self.source.into()),
        })
    }

    /// Version tag from the `// <name> v<N>` header line, if present.
    pub fn header_version(&self) -> Option<u32> {
        let line = self.source.lines().next()?.trim();
        let rest = line.strip_prefix("//")?.trim().strip_prefix(self.name)?;
        rest.trim().strip_prefix('v')?.parse().ok()
    }
}

/// Position + color pass-through with a single MVP uniform.
pub const WIREFRAME: ShaderAsset = ShaderAsset {
    name: "facet-wireframe",
    version: 1,
    source: include_str!("shaders/wireframe.wgsl"),
    vertex_entry: "vs_main",
    fragment_entry: "fs_main",
    uniform_group: 0,
    uniform_binding: 0,
    vertex_slot: 0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_matches_declared_version() {
        assert_eq!(WIREFRAME.header_version(), Some(WIREFRAME.version));
    }

    #[test]
    fn entry_points_exist() {
        assert!(WIREFRAME.source.contains(&format!("fn {}(", WIREFRAME.vertex_entry)));
        assert!(WIREFRAME.source.contains(&format!("fn {}(", WIREFRAME.fragment_entry)));
    }

    #[test]
    fn uniform_binding_matches_source() {
        let decl = format!(
            "@group({}) @binding({})",
            WIREFRAME.uniform_group, WIREFRAME.uniform_binding
        );
        assert!(WIREFRAME.source.contains(&decl));
        assert!(WIREFRAME.source.contains("mvp: mat4x4<f32>"));
    }

    #[test]
    fn vertex_locations_match_layout() {
        assert!(WIREFRAME.source.contains("@location(0) position: vec3<f32>"));
        assert!(WIREFRAME.source.contains("@location(1) color: vec4<f32>"));
    }

    #[test]
    fn missing_header_has_no_version() {
        let asset = ShaderAsset {
            source: "@vertex fn vs_main() {}",
            ..WIREFRAME
        };
        assert_eq!(asset.header_version(), None);
    }
}
