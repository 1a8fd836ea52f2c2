//! Prints a few worked examples of the vector, matrix and projection APIs.
//!
//! Set `RUST_LOG=trace` to see what the projection builder logs.

use cgm::projection::Perspective;
use cgm::{row3, vec3, Column, MajorOrder, Mat3, Matrix, Row, Vec4f};

fn main() -> anyhow::Result<()> {
    cgm::init_logger!();

    #[rustfmt::skip]
    let m: Mat3<f32> = Matrix::from_rows([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);
    let v = vec3(1.0, 2.0, 3.0);

    println!("M =\n{m}");
    println!("M * M =\n{}", m * m);
    println!("M^T =\n{}", m.transpose());
    println!("M * v = {}", m * v);
    println!("v^T * M = {}", row3(1.0, 2.0, 3.0) * m);
    println!("v * v^T =\n{}", v * v.transpose());
    println!("v x (2, 2, 2) = {}", v.cross(vec3(2.0, 2.0, 2.0)));
    println!("sum(v) = {}, |v|^2 = {}, |v| = {}", v.sum(), v.norm2(), v.norm());
    println!("normalize(v) = {}", v.normalize());

    let rows: Vec<Vec<f32>> = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
    match Mat3::<f32>::try_from_rows(&rows) {
        Ok(_) => log::warn!("ragged rows were accepted"),
        Err(e) => println!("rejected ragged rows: {e}"),
    }
    match v.checked_div(0.0) {
        Ok(_) => log::warn!("division by zero was accepted"),
        Err(e) => println!("v / 0: {e}"),
    }

    let persp = Perspective::new(60.0, 16.0 / 9.0, 0.1, 100.0)?;
    let proj = persp.matrix::<Column>();
    println!("perspective({persp}) =\n{proj}");

    let mut gpu_buffer = [0.0; 16];
    proj.write_to(MajorOrder::ColumnMajor, &mut gpu_buffer)?;
    println!("column-major upload: {gpu_buffer:?}");

    let point = vec3(0.5, -0.25, -2.0).embed::<4>(1.0);
    let clip = proj * point;
    let ndc: Vec4f = clip / clip.w;
    println!("{point} projects to {clip} (ndc {ndc})");

    let row_clip = point.transpose() * persp.matrix::<Row>();
    log::debug!("row-vector convention gives {row_clip}");

    Ok(())
}
