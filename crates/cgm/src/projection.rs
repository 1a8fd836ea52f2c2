//! Perspective projection matrices.
//!
//! The produced matrices map view space (camera looking down `-Z`, `Y` up) to clip space with the
//! OpenGL depth convention: after the perspective divide, `-near` maps to `-1.0` and `-far` maps to
//! `1.0`.

use std::fmt;

use cgm_linalg::{Mat4f, Matrix, Orientation};
use thiserror::Error;

/// Invalid [`Perspective`] parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ProjectionError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("vertical field of view must be between 0 and 180 degrees, got {0}")]
    FieldOfView(f32),

    #[error("aspect ratio must be positive, got {0}")]
    AspectRatio(f32),

    #[error("clip planes must satisfy 0 < near < far, got near={near}, far={far}")]
    ClipPlanes { near: f32, far: f32 },
}

/// Parameters of a symmetric perspective projection.
///
/// # Examples
///
/// ```
/// use cgm::{projection::Perspective, vec4, Column};
///
/// let persp = Perspective::new(90.0, 16.0 / 9.0, 0.1, 100.0)?;
/// let proj = persp.matrix::<Column>();
///
/// // A point on the near plane ends up at depth -1 after the perspective divide.
/// let clip = proj * vec4(0.0, 0.0, -0.1, 1.0);
/// assert!((clip.z / clip.w + 1.0).abs() < 1e-5);
/// # Ok::<(), cgm::projection::ProjectionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    fov_y_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Perspective {
    /// Creates a perspective projection.
    ///
    /// - `fov_y_degrees`: vertical field of view, in degrees.
    /// - `aspect`: viewport width divided by its height.
    /// - `near`/`far`: distances of the clip planes from the camera.
    ///
    /// # Errors
    ///
    /// Returns a [`ProjectionError`] if any parameter is not finite, if the field of view is not
    /// strictly between 0 and 180 degrees, if `aspect` is not positive, or unless
    /// `0 < near < far`.
    pub fn new(
        fov_y_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, ProjectionError> {
        let this = Self {
            fov_y_degrees,
            aspect,
            near,
            far,
        };
        match this.validate() {
            Ok(()) => {
                log::debug!("created perspective projection: {this}");
                Ok(this)
            }
            Err(e) => {
                log::debug!("rejected perspective projection ({this}): {e}");
                Err(e)
            }
        }
    }

    fn validate(&self) -> Result<(), ProjectionError> {
        for (name, value) in [
            ("field of view", self.fov_y_degrees),
            ("aspect ratio", self.aspect),
            ("near plane", self.near),
            ("far plane", self.far),
        ] {
            if !value.is_finite() {
                return Err(ProjectionError::NotFinite { name, value });
            }
        }
        if self.fov_y_degrees <= 0.0 || self.fov_y_degrees >= 180.0 {
            return Err(ProjectionError::FieldOfView(self.fov_y_degrees));
        }
        if self.aspect <= 0.0 {
            return Err(ProjectionError::AspectRatio(self.aspect));
        }
        if self.near <= 0.0 || self.near >= self.far {
            return Err(ProjectionError::ClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[inline]
    pub fn near(&self) -> f32 {
        self.near
    }

    #[inline]
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Returns the projection matrix for vectors of orientation `O`.
    ///
    /// With [`Column`][cgm_linalg::Column], points are projected as `proj * p`; with
    /// [`Row`][cgm_linalg::Row], as `p * proj`. The two matrices are transposes of each other.
    pub fn matrix<O: Orientation>(&self) -> Mat4f {
        let (n, f) = (self.near, self.far);
        let t = (self.fov_y_degrees.to_radians() * 0.5).tan() * n;
        let b = -t;
        let r = self.aspect * t;
        let l = -r;

        #[rustfmt::skip]
        let column = Matrix::from_rows([
            [2.0 * n / (r - l), 0.0,               (r + l) / (r - l),   0.0],
            [0.0,               2.0 * n / (t - b), (t + b) / (t - b),   0.0],
            [0.0,               0.0,               -(f + n) / (f - n),  -2.0 * f * n / (f - n)],
            [0.0,               0.0,               -1.0,                0.0],
        ]);

        log::trace!("projection frustum: l={l} r={r} b={b} t={t} n={n} f={f}");
        if O::IS_ROW {
            column.transpose()
        } else {
            column
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fov_y={}°, aspect={}, near={}, far={}",
            self.fov_y_degrees, self.aspect, self.near, self.far
        )
    }
}

/// Builds a perspective projection matrix for column vectors.
///
/// Shorthand for [`Perspective::new`] followed by [`Perspective::matrix`].
pub fn perspective(
    fov_y_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> Result<Mat4f, ProjectionError> {
    Ok(Perspective::new(fov_y_degrees, aspect, near, far)?.matrix::<cgm_linalg::Column>())
}

#[cfg(test)]
mod tests {
    use cgm_linalg::{assert_approx_eq, vec4, Column, Row};

    use super::*;

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            Perspective::new(0.0, 1.0, 0.1, 10.0),
            Err(ProjectionError::FieldOfView(0.0))
        );
        assert_eq!(
            Perspective::new(180.0, 1.0, 0.1, 10.0),
            Err(ProjectionError::FieldOfView(180.0))
        );
        assert_eq!(
            Perspective::new(60.0, -1.0, 0.1, 10.0),
            Err(ProjectionError::AspectRatio(-1.0))
        );
        assert_eq!(
            Perspective::new(60.0, 1.0, 10.0, 10.0),
            Err(ProjectionError::ClipPlanes {
                near: 10.0,
                far: 10.0
            })
        );
        assert_eq!(
            Perspective::new(60.0, 1.0, 0.0, 10.0),
            Err(ProjectionError::ClipPlanes {
                near: 0.0,
                far: 10.0
            })
        );
        assert!(matches!(
            Perspective::new(60.0, f32::NAN, 0.1, 10.0),
            Err(ProjectionError::NotFinite {
                name: "aspect ratio",
                ..
            })
        ));
        assert!(matches!(
            Perspective::new(60.0, 1.0, 0.1, f32::INFINITY),
            Err(ProjectionError::NotFinite {
                name: "far plane",
                ..
            })
        ));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ProjectionError::ClipPlanes {
                near: 2.0,
                far: 1.0
            }
            .to_string(),
            "clip planes must satisfy 0 < near < far, got near=2, far=1"
        );
    }

    #[test]
    fn square_90_degrees() {
        let proj = Perspective::new(90.0, 1.0, 1.0, 3.0).unwrap().matrix::<Column>();
        #[rustfmt::skip]
        assert_approx_eq!(proj, Matrix::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, -2.0, -3.0],
            [0.0, 0.0, -1.0, 0.0],
        ])).abs(1e-6);
    }

    #[test]
    fn depth_range() {
        let persp = Perspective::new(60.0, 1.5, 0.5, 50.0).unwrap();
        let proj = persp.matrix::<Column>();

        let near = proj * vec4(0.0, 0.0, -persp.near(), 1.0);
        assert_approx_eq!(near.z / near.w, -1.0).abs(1e-5);
        let far = proj * vec4(0.0, 0.0, -persp.far(), 1.0);
        assert_approx_eq!(far.z / far.w, 1.0).abs(1e-5);
    }

    #[test]
    fn row_convention_is_transpose() {
        let persp = Perspective::new(75.0, 4.0 / 3.0, 0.1, 100.0).unwrap();
        let col = persp.matrix::<Column>();
        let row = persp.matrix::<Row>();
        assert_eq!(row, col.transpose());

        let p = vec4(1.0, -2.0, -5.0, 1.0);
        assert_approx_eq!((p.transpose() * row).transpose(), col * p);
    }

    #[test]
    fn shorthand() {
        assert_eq!(
            perspective(45.0, 2.0, 1.0, 10.0),
            Ok(Perspective::new(45.0, 2.0, 1.0, 10.0).unwrap().matrix::<Column>())
        );
        assert!(perspective(45.0, 0.0, 1.0, 10.0).is_err());
    }
}
