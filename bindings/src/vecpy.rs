use pyo3::{
    Bound, FromPyObject, IntoPyObject, PyErr,
    types::{PyAnyMethods, PyList},
};

/// Owned f32 sample buffer that crosses the Python boundary in both
/// directions, converting to and from plain Python lists.
pub struct VecPy {
    pub inner: Vec<f32>,
}

impl AsRef<[f32]> for VecPy {
    fn as_ref(&self) -> &[f32] {
        self.inner.as_ref()
    }
}

/// Parses an arbitrary Python object into an owned sample vector. The samples
/// are copied out eagerly since the Python side is free to drop or mutate the
/// original list at any point.
///
/// Anything that is not a list of floats raises a TypeError on the Python side.
impl<'a> FromPyObject<'a> for VecPy {
    fn extract_bound(ob: &pyo3::Bound<'a, pyo3::PyAny>) -> pyo3::PyResult<Self> {
        let list: Vec<f32> = ob.downcast::<PyList>()?.extract()?;
        Ok(VecPy { inner: list })
    }
}

// Hands the samples back to Python as a plain list
impl<'a> IntoPyObject<'a> for VecPy {
    type Target = PyList;
    type Output = Bound<'a, PyList>;
    type Error = PyErr;

    fn into_pyobject(self, py: pyo3::Python<'a>) -> Result<Self::Output, Self::Error> {
        let internal = self.inner;
        PyList::new(py, internal)
    }
}

impl Clone for VecPy {
    fn clone(&self) -> Self {
        VecPy {
            inner: self.inner.clone(),
        }
    }
}
