//! Multipoint evaluation and interpolation via a subproduct tree.
//!
//! The tree over points `x_0..x_{n-1}` stores at each node the product of
//! `(x - x_i)` over the points below it. Evaluation pushes remainders down
//! the tree; interpolation pushes weighted sums up. Both cost
//! `O(M(n) log n)` where `M` is the multiplication cost.

use rayon::join;
use tracing::debug;

use crate::convolve::Convolve;
use crate::dense::DensePoly;
use crate::error::PolyError;

/// Subtrees with at least this many points are built and walked in parallel.
pub const PARALLEL_THRESHOLD: usize = 256;

/// Subtrees with fewer than this many points are finished with Horner's rule.
pub const HORNER_THRESHOLD: usize = 8;

/// Configuration for multipoint evaluation and interpolation.
#[derive(Clone, Debug)]
pub struct MultipointConfig {
    /// Minimum subtree size to split work with `rayon::join`.
    pub parallel_threshold: usize,
    /// Subtrees smaller than this are evaluated directly instead of by
    /// remainders.
    pub horner_threshold: usize,
}

impl Default for MultipointConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: PARALLEL_THRESHOLD,
            horner_threshold: HORNER_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug)]
struct Node<F: Convolve> {
    poly: DensePoly<F>,
    start: usize,
    len: usize,
    children: Option<Box<(Node<F>, Node<F>)>>,
}

/// The subproduct tree of a list of points.
#[derive(Clone, Debug)]
pub struct ProductTree<F: Convolve> {
    points: Vec<F>,
    root: Node<F>,
    config: MultipointConfig,
}

impl<F: Convolve + Send + Sync> ProductTree<F> {
    /// Builds the tree with the default configuration.
    #[must_use]
    pub fn new(points: &[F]) -> Self {
        Self::with_config(points, MultipointConfig::default())
    }

    /// Builds the tree.
    #[must_use]
    pub fn with_config(points: &[F], config: MultipointConfig) -> Self {
        debug!(points = points.len(), "building product tree");
        let root = if points.is_empty() {
            Node {
                poly: DensePoly::one(),
                start: 0,
                len: 0,
                children: None,
            }
        } else {
            build(points, 0, &config)
        };
        Self {
            points: points.to_vec(),
            root,
            config,
        }
    }

    /// Returns `Π (x - x_i)`; 1 for no points.
    #[must_use]
    pub fn root(&self) -> &DensePoly<F> {
        &self.root.poly
    }

    /// Returns the points the tree was built over.
    #[must_use]
    pub fn points(&self) -> &[F] {
        &self.points
    }

    /// Evaluates `a` at every point of the tree.
    #[must_use]
    pub fn evaluate(&self, a: &DensePoly<F>) -> Vec<F> {
        if self.points.is_empty() {
            return Vec::new();
        }
        self.descend(&self.root, a)
    }

    fn descend(&self, node: &Node<F>, a: &DensePoly<F>) -> Vec<F> {
        if node.len < self.config.horner_threshold {
            let pts = &self.points[node.start..node.start + node.len];
            return pts.iter().map(|x| a.eval(x)).collect();
        }
        let r = a % &node.poly;
        let Some(children) = &node.children else {
            return vec![r.coeff(0)];
        };
        let (left, right) = &**children;

        let (mut lv, rv) = if node.len >= self.config.parallel_threshold {
            join(|| self.descend(left, &r), || self.descend(right, &r))
        } else {
            (self.descend(left, &r), self.descend(right, &r))
        };
        lv.extend(rv);
        lv
    }

    /// Computes the polynomial of degree below `n` taking `ys[i]` at the
    /// `i`-th point.
    ///
    /// # Errors
    ///
    /// - [`PolyError::EmptyInterpolation`] if the tree has no points
    /// - [`PolyError::LengthMismatch`] if `ys` has the wrong length
    /// - [`PolyError::DuplicateNode`] if two points coincide
    pub fn interpolate(&self, ys: &[F]) -> Result<DensePoly<F>, PolyError> {
        if self.points.is_empty() {
            return Err(PolyError::EmptyInterpolation);
        }
        if ys.len() != self.points.len() {
            return Err(PolyError::LengthMismatch {
                points: self.points.len(),
                values: ys.len(),
            });
        }

        // w_i = y_i / P'(x_i); P'(x_i) vanishes exactly when x_i is repeated.
        let derivs = self.evaluate(&self.root.poly.derivative());
        if let Some(index) = self.first_repeat(&derivs) {
            return Err(PolyError::DuplicateNode { index });
        }
        let weights = derivs
            .iter()
            .zip(ys)
            .enumerate()
            .map(|(index, (d, y))| {
                d.inv()
                    .map(|inv| y.clone() * inv)
                    .ok_or(PolyError::DuplicateNode { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.ascend(&self.root, &weights))
    }

    /// Smallest `j` with `x_j == x_i` for some `i < j`. Only points where
    /// `P'` vanishes can take part.
    fn first_repeat(&self, derivs: &[F]) -> Option<usize> {
        let suspects: Vec<usize> = (0..derivs.len()).filter(|&i| derivs[i].is_zero()).collect();
        suspects.iter().enumerate().find_map(|(k, &j)| {
            suspects[..k]
                .iter()
                .any(|&i| self.points[i] == self.points[j])
                .then_some(j)
        })
    }

    fn ascend(&self, node: &Node<F>, weights: &[F]) -> DensePoly<F> {
        let Some(children) = &node.children else {
            return DensePoly::constant(weights[node.start].clone());
        };
        let (left, right) = &**children;

        let (l, r) = if node.len >= self.config.parallel_threshold {
            join(|| self.ascend(left, weights), || self.ascend(right, weights))
        } else {
            (self.ascend(left, weights), self.ascend(right, weights))
        };
        &(&l * &right.poly) + &(&r * &left.poly)
    }
}

fn build<F: Convolve + Send + Sync>(points: &[F], start: usize, config: &MultipointConfig) -> Node<F> {
    if let [x] = points {
        return Node {
            poly: DensePoly::new(vec![-x.clone(), F::one()]),
            start,
            len: 1,
            children: None,
        };
    }

    let mid = points.len() / 2;
    let (lp, rp) = points.split_at(mid);
    let (left, right) = if points.len() >= config.parallel_threshold {
        join(|| build(lp, start, config), || build(rp, start + mid, config))
    } else {
        (build(lp, start, config), build(rp, start + mid, config))
    };

    Node {
        poly: &left.poly * &right.poly,
        start,
        len: points.len(),
        children: Some(Box::new((left, right))),
    }
}

/// Evaluates `a` at each of `xs`.
#[must_use]
pub fn evaluate<F: Convolve + Send + Sync>(a: &DensePoly<F>, xs: &[F]) -> Vec<F> {
    evaluate_with(a, xs, &MultipointConfig::default())
}

/// Evaluates `a` at each of `xs` with explicit thresholds.
#[must_use]
pub fn evaluate_with<F: Convolve + Send + Sync>(
    a: &DensePoly<F>,
    xs: &[F],
    config: &MultipointConfig,
) -> Vec<F> {
    if xs.len() < config.horner_threshold {
        return xs.iter().map(|x| a.eval(x)).collect();
    }
    ProductTree::with_config(xs, config.clone()).evaluate(a)
}

/// Returns the unique polynomial of degree below `xs.len()` through the
/// points `(xs[i], ys[i])`.
///
/// # Errors
///
/// See [`ProductTree::interpolate`].
pub fn interpolate<F: Convolve + Send + Sync>(xs: &[F], ys: &[F]) -> Result<DensePoly<F>, PolyError> {
    interpolate_with(xs, ys, &MultipointConfig::default())
}

/// [`interpolate`] with explicit thresholds.
///
/// # Errors
///
/// See [`ProductTree::interpolate`].
pub fn interpolate_with<F: Convolve + Send + Sync>(
    xs: &[F],
    ys: &[F],
    config: &MultipointConfig,
) -> Result<DensePoly<F>, PolyError> {
    if xs.is_empty() {
        return Err(PolyError::EmptyInterpolation);
    }
    if xs.len() != ys.len() {
        return Err(PolyError::LengthMismatch {
            points: xs.len(),
            values: ys.len(),
        });
    }
    ProductTree::with_config(xs, config.clone()).interpolate(ys)
}

impl<F: Convolve + Send + Sync> DensePoly<F> {
    /// Returns `Π (x - r)` over `roots`.
    #[must_use]
    pub fn from_roots(roots: &[F]) -> Self {
        ProductTree::new(roots).root.poly
    }
}
