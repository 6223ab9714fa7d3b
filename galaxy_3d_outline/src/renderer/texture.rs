/// Texture formats and temporary render target descriptors

/// Texture format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    // Color formats
    R8_UNORM,

    // Depth/stencil formats
    D16_UNORM,
    D32_FLOAT,
    D24_UNORM_S8_UINT,
    D32_FLOAT_S8_UINT,
}

impl TextureFormat {
    /// Returns true for depth and depth/stencil formats
    pub fn is_depth(&self) -> bool {
        matches!(
            self,
            TextureFormat::D16_UNORM
                | TextureFormat::D32_FLOAT
                | TextureFormat::D24_UNORM_S8_UINT
                | TextureFormat::D32_FLOAT_S8_UINT
        )
    }
}

// ===== TEMPORARY TARGET DESC =====

/// Descriptor for a temporary render target.
///
/// Temporary targets live inside one command sequence: acquired by
/// `GetTemporaryTarget`, returned by `ReleaseTemporaryTarget`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporaryTargetDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Color format
    pub format: TextureFormat,
    /// Depth/stencil attachment format
    pub depth_stencil_format: TextureFormat,
    /// MSAA sample count (1 = no multisampling)
    pub msaa_samples: u32,
    /// sRGB read/write conversion
    pub srgb: bool,
    /// Mip level count (1 = no mipmaps)
    pub mip_levels: u32,
    /// Generate mips automatically after rendering
    pub auto_generate_mips: bool,
}

impl TemporaryTargetDesc {
    /// Single-channel silhouette target: R8, no MSAA, linear, no mipmaps.
    pub fn silhouette(width: u32, height: u32, depth_stencil_format: TextureFormat) -> Self {
        Self {
            width,
            height,
            format: TextureFormat::R8_UNORM,
            depth_stencil_format,
            msaa_samples: 1,
            srgb: false,
            mip_levels: 1,
            auto_generate_mips: false,
        }
    }

    /// True when either dimension is zero (nothing can be rendered)
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
