//! Goal-driven orchestration over the spectral core.
//!
//! A request names how far through the pipeline to run:
//!
//!   points → adjacency → degrees → D^{-1/2} → laplacian → jacobi →
//!   sorted eigenpairs → k selection → U → T
//!
//! Each goal allocates only the matrices it needs, every prerequisite is
//! computed exactly once per request, and nothing is cached across requests.
//! Validation (goal string, cluster count range, squareness of a direct
//! eigendecomposition input) happens before any computation starts.
//!
//! Input, file parsing and the k-means step that consumes T are external
//! collaborators; this crate begins at an already-loaded point matrix and
//! ends at the goal's output matrices.

use log::{debug, info};
use spectembed_core::embedding::{
    build_embedding, select_cluster_count, sort_eigenpairs, ClusterSelection, Embedding,
};
use spectembed_core::error::{Result, SpectralError};
use spectembed_core::graph::{build_adjacency, build_degree, inverse_sqrt_degree};
use spectembed_core::jacobi::{JacobiConfig, JacobiSolver};
use spectembed_core::laplacian::build_normalized_laplacian;
use spectembed_core::matrix::{max_value, min_value, DenseMatrix};
use std::fmt;
use std::str::FromStr;

/// How far through the pipeline a request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Weighted adjacency matrix only.
    Adjacency,
    /// Diagonal degree matrix.
    Degree,
    /// Normalized graph Laplacian.
    Laplacian,
    /// Eigendecomposition of the input matrix itself, which must be square
    /// and symmetric; the graph stages are skipped.
    Eigen,
    /// Full pipeline through the row-normalized embedding T.
    Embed,
}

impl FromStr for Goal {
    type Err = SpectralError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wam" => Ok(Goal::Adjacency),
            "ddg" => Ok(Goal::Degree),
            "lnorm" => Ok(Goal::Laplacian),
            "jacobi" => Ok(Goal::Eigen),
            "spk" => Ok(Goal::Embed),
            other => Err(SpectralError::UnknownGoal(other.to_string())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Goal::Adjacency => "wam",
            Goal::Degree => "ddg",
            Goal::Laplacian => "lnorm",
            Goal::Eigen => "jacobi",
            Goal::Embed => "spk",
        };
        write!(f, "{name}")
    }
}

/// One self-contained computation request.
///
/// Owns its input and every buffer derived from it; no state survives into
/// the next request.
#[derive(Debug, Clone)]
pub struct SpectralRequest {
    pub input: DenseMatrix,
    pub goal: Goal,
    pub selection: ClusterSelection,
    pub jacobi: JacobiConfig,
}

impl SpectralRequest {
    pub fn new(input: DenseMatrix, goal: Goal) -> Self {
        Self {
            input,
            goal,
            selection: ClusterSelection::Eigengap,
            jacobi: JacobiConfig::default(),
        }
    }

    pub fn with_selection(mut self, selection: ClusterSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_jacobi(mut self, config: JacobiConfig) -> Self {
        self.jacobi = config;
        self
    }

    /// Validate, then run the pipeline up to the requested goal.
    pub fn run(self) -> Result<GoalOutput> {
        self.validate()?;
        let n = self.input.rows();
        info!("goal {} over {n} input rows", self.goal);

        match self.goal {
            Goal::Adjacency => Ok(GoalOutput::Adjacency(build_adjacency(&self.input))),
            Goal::Degree => {
                let adjacency = build_adjacency(&self.input);
                Ok(GoalOutput::Degree(build_degree(&adjacency)))
            }
            Goal::Laplacian => Ok(GoalOutput::Laplacian(laplacian_from_points(&self.input))),
            Goal::Eigen => {
                let out = JacobiSolver::new(self.jacobi).decompose(&self.input);
                info!(
                    "eigenvalues: min={:.6}, max={:.6}, {} rotations, converged={}",
                    min_value(&out.eigenvalues),
                    max_value(&out.eigenvalues),
                    out.iterations,
                    out.converged
                );
                Ok(GoalOutput::Eigen {
                    eigenvalues: out.eigenvalues,
                    eigenvectors: out.eigenvectors,
                })
            }
            Goal::Embed => {
                let laplacian = laplacian_from_points(&self.input);
                let decomposition = JacobiSolver::new(self.jacobi).decompose(&laplacian);
                let pairs = sort_eigenpairs(&decomposition);
                let k = select_cluster_count(&pairs.values, self.selection)?;
                info!("embedding: k={k} over {n} points");
                Ok(GoalOutput::Embed(build_embedding(&pairs, k)))
            }
        }
    }

    /// Rejections that must precede any computation.
    fn validate(&self) -> Result<()> {
        match self.goal {
            Goal::Eigen if !self.input.is_square() => Err(SpectralError::NonSquareInput {
                rows: self.input.rows(),
                cols: self.input.cols(),
            }),
            Goal::Embed => match self.selection {
                ClusterSelection::Explicit(k) if k == 0 || k > self.input.rows() => {
                    Err(SpectralError::ClusterCountOutOfRange {
                        requested: k,
                        n: self.input.rows(),
                    })
                }
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }
}

/// Graph stages in sequence; each intermediate is built exactly once.
fn laplacian_from_points(points: &DenseMatrix) -> DenseMatrix {
    let adjacency = build_adjacency(points);
    let degree = build_degree(&adjacency);
    let inv_sqrt = inverse_sqrt_degree(&degree);
    debug!("graph stages complete for {} points", points.rows());
    build_normalized_laplacian(&adjacency, &inv_sqrt)
}

/// Output of a request, sized to its goal.
#[derive(Debug, Clone)]
pub enum GoalOutput {
    Adjacency(DenseMatrix),
    Degree(DenseMatrix),
    Laplacian(DenseMatrix),
    Eigen {
        eigenvalues: Vec<f64>,
        eigenvectors: DenseMatrix,
    },
    Embed(Embedding),
}
