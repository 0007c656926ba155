use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, bail};
    use blockcraft_math::{
        Matrix4x4, Vector4,
        angle::{Angle, Degrees, Radians},
        focal_scale_from_vertical_fov,
    };
    use clap::{Parser, Subcommand};

    #[derive(Debug, Parser)]
    #[command(about = "Builds and prints Blockcraft transformation matrices", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,

        /// Print the transpose of the resulting matrix
        #[arg(long, global = true)]
        transpose: bool,

        /// Number of decimals to print for each element
        #[arg(short, long, global = true)]
        precision: Option<usize>,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// The identity matrix
        Identity,
        /// Rotation about the x-, then y-, then z-axis, composed as X * Y * Z
        Rotation {
            /// Angle about the x-axis
            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            x: f32,

            /// Angle about the y-axis
            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            y: f32,

            /// Angle about the z-axis
            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            z: f32,

            /// Interpret the angles as degrees rather than radians
            #[arg(long)]
            degrees: bool,
        },
        /// Translation placed in the last row
        Translation {
            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            x: f32,

            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            y: f32,

            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            z: f32,
        },
        /// Orientation basis looking along a direction
        LookAt {
            /// Viewing direction as `x,y,z`
            #[arg(long, value_parser = parse_direction, allow_hyphen_values = true)]
            direction: Vector4,

            /// Approximate up direction as `x,y,z`
            #[arg(long, value_parser = parse_direction, default_value = "0,1,0", allow_hyphen_values = true)]
            up: Vector4,
        },
        /// Perspective projection mapping depths between the near and far
        /// distance to [0, 1]
        Perspective {
            /// Vertical field of view in degrees
            #[arg(long, default_value_t = 60.0)]
            vertical_fov: f32,

            /// Factor applied to the horizontal focal scale
            #[arg(long, default_value_t = 1.0)]
            aspect_ratio: f32,

            /// Near distance
            #[arg(long, default_value_t = 0.1)]
            near: f32,

            /// Far distance
            #[arg(long, default_value_t = 100.0)]
            far: f32,
        },
    }

    const DEGENERACY_TOLERANCE: f32 = 1e-6;

    fn parse_direction(text: &str) -> Result<Vector4> {
        let components = text
            .split(',')
            .map(|component| {
                component
                    .trim()
                    .parse::<f32>()
                    .with_context(|| format!("invalid vector component `{component}`"))
            })
            .collect::<Result<Vec<_>>>()?;

        match components[..] {
            [x, y, z] => Ok(Vector4::direction(x, y, z)),
            _ => bail!(
                "expected three comma-separated components, got {}",
                components.len()
            ),
        }
    }

    fn build_matrix(command: &Command) -> Result<Matrix4x4> {
        let matrix = match *command {
            Command::Identity => Matrix4x4::IDENTITY,
            Command::Rotation { x, y, z, degrees } => {
                let radians = |value: f32| {
                    if degrees {
                        Degrees(value).radians()
                    } else {
                        Radians(value).radians()
                    }
                };
                let angles = Vector4::direction(radians(x), radians(y), radians(z));
                log::debug!("Rotation angles in radians: {angles:?}");
                Matrix4x4::rotation(&angles)
            }
            Command::Translation { x, y, z } => {
                Matrix4x4::translation(&Vector4::direction(x, y, z))
            }
            Command::LookAt { direction, up } => {
                if direction.norm() < DEGENERACY_TOLERANCE {
                    bail!("the look direction must be non-zero");
                }
                if up.cross(&direction).norm() < DEGENERACY_TOLERANCE * direction.norm() {
                    bail!("the up direction must not be parallel to the look direction");
                }
                Matrix4x4::look_at(&direction, &up)
            }
            Command::Perspective {
                vertical_fov,
                aspect_ratio,
                near,
                far,
            } => {
                if !(vertical_fov > 0.0 && vertical_fov < 180.0) {
                    bail!("the vertical field of view must be between 0 and 180 degrees");
                }
                if aspect_ratio <= 0.0 {
                    bail!("the aspect ratio must be positive");
                }
                if near == far {
                    bail!("the near and far distance must differ");
                }
                let focal_scale = focal_scale_from_vertical_fov(Degrees(vertical_fov));
                log::debug!("Focal scale for {vertical_fov} degrees: {focal_scale}");
                Matrix4x4::perspective(focal_scale, aspect_ratio, near, far)
            }
        };
        Ok(matrix)
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Building matrix for {:?}", cli.command);

        let mut matrix = build_matrix(&cli.command)?;
        if cli.transpose {
            matrix = matrix.transposed();
        }

        if matrix.as_slice().iter().any(|element| !element.is_finite()) {
            log::warn!("Matrix contains non-finite elements");
        }

        match cli.precision {
            Some(precision) => print!("{matrix:.precision$}"),
            None => print!("{matrix}"),
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parsing_direction_works() {
            let direction = parse_direction("1, -2.5,3").unwrap();
            assert_eq!(direction, Vector4::direction(1.0, -2.5, 3.0));
        }

        #[test]
        fn parsing_direction_with_wrong_component_count_fails() {
            assert!(parse_direction("1,2").is_err());
            assert!(parse_direction("1,2,3,4").is_err());
            assert!(parse_direction("1,x,3").is_err());
        }

        #[test]
        fn building_rotation_in_degrees_matches_radians() {
            let in_degrees = build_matrix(&Command::Rotation {
                x: 90.0,
                y: 0.0,
                z: 0.0,
                degrees: true,
            })
            .unwrap();
            let in_radians = build_matrix(&Command::Rotation {
                x: std::f32::consts::FRAC_PI_2,
                y: 0.0,
                z: 0.0,
                degrees: false,
            })
            .unwrap();
            assert!(approx::abs_diff_eq!(in_degrees, in_radians, epsilon = 1e-6));
        }

        #[test]
        fn building_degenerate_look_at_fails() {
            assert!(
                build_matrix(&Command::LookAt {
                    direction: Vector4::zeros(),
                    up: Vector4::direction(0.0, 1.0, 0.0),
                })
                .is_err()
            );
            assert!(
                build_matrix(&Command::LookAt {
                    direction: Vector4::direction(0.0, 3.0, 0.0),
                    up: Vector4::direction(0.0, 1.0, 0.0),
                })
                .is_err()
            );
        }

        #[test]
        fn building_degenerate_perspective_fails() {
            let perspective = |vertical_fov, near, far| Command::Perspective {
                vertical_fov,
                aspect_ratio: 1.0,
                near,
                far,
            };
            assert!(build_matrix(&perspective(60.0, 1.0, 1.0)).is_err());
            assert!(build_matrix(&perspective(0.0, 1.0, 10.0)).is_err());
            assert!(build_matrix(&perspective(90.0, 1.0, 10.0)).is_ok());
        }

        #[test]
        fn cli_parses_negative_rotation_angles() {
            let cli = Cli::try_parse_from([
                "blockcraft_math",
                "rotation",
                "--x",
                "-45",
                "--degrees",
                "--precision",
                "3",
            ])
            .unwrap();
            assert_eq!(cli.precision, Some(3));
            assert!(matches!(
                cli.command,
                Command::Rotation { x, degrees: true, .. } if x == -45.0
            ));
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
