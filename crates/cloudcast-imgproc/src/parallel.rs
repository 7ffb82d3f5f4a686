use rayon::prelude::*;

use cloudcast_image::Image;

/// Apply a function to each pixel of a pair of images in parallel by rows.
///
/// The source and destination images must have the same resolution; the
/// closure receives one source pixel slice and the matching destination
/// pixel slice.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize, F>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    func: F,
) where
    T1: Send + Sync,
    T2: Send + Sync,
    F: Fn(&[T1], &mut [T2]) + Send + Sync,
{
    let src_row_len = src.cols() * C1;
    let dst_row_len = dst.cols() * C2;

    src.as_slice()
        .par_chunks_exact(src_row_len)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(dst_row_len))
        .for_each(|(src_row, dst_row)| {
            src_row
                .chunks_exact(C1)
                .zip(dst_row.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| func(src_pixel, dst_pixel));
        });
}
