use nalgebra::{Const, Matrix, Owned, Vector};

pub type StateVec<T, const N: usize, S = Owned<T, Const<N>, Const<1>>> = Vector<T, Const<N>, S>;
pub type CovMat<T, const N: usize, S = Owned<T, Const<N>, Const<N>>> =
    Matrix<T, Const<N>, Const<N>, S>;
