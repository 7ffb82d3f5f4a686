use crate::camera::CameraIntrinsic;
use crate::pointcloud::PointCloud;
use crate::rgbd::RgbdImage;

/// Back-project an RGB-D frame into a dense point cloud with the pinhole
/// model.
///
/// Each pixel `(u, v)` with depth `d` (meters) maps to camera-frame
/// coordinates
///
/// ```text
/// x = (u - cx) / fx * d
/// y = (v - cy) / fy * d
/// z = d
/// ```
///
/// The projection is applied uniformly to every pixel: zero or non-finite
/// depth values are not filtered and keep their degenerate projection in the
/// grid (the all-zero point for `d = 0`). Validity filtering is the
/// consumer's responsibility; the output always holds one point per pixel,
/// carrying the frame's colors unchanged.
///
/// # Arguments
///
/// * `frame` - The RGB-D frame to back-project.
/// * `intrinsic` - The pinhole intrinsic parameters of the depth camera.
///
/// # Returns
///
/// A dense point cloud with the same grid shape as the input frame.
pub fn pointcloud_from_rgbd(frame: &RgbdImage, intrinsic: &CameraIntrinsic) -> PointCloud {
    let (width, height) = (frame.width(), frame.height());

    let depth = frame.depth().as_slice();
    let rgb = frame.rgb().as_slice();

    let mut points = Vec::with_capacity(width * height);
    let mut colors = Vec::with_capacity(width * height);

    for v in 0..height {
        for u in 0..width {
            let idx = v * width + u;
            let d = depth[idx];

            let x = (u as f64 - intrinsic.cx) / intrinsic.fx * d;
            let y = (v as f64 - intrinsic.cy) / intrinsic.fy * d;
            points.push([x, y, d]);

            let rgb_idx = idx * 3;
            colors.push([rgb[rgb_idx], rgb[rgb_idx + 1], rgb[rgb_idx + 2]]);
        }
    }

    PointCloud::new(points, Some(colors), width, height)
}
