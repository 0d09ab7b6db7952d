//! Checked elementwise array operations.

use crate::outcome::OpError;
use crate::wrap::dense::DynArray;

fn require_same_len(a: &DynArray, b: &DynArray) -> Result<(), OpError> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(OpError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        })
    }
}

fn check_index(a: &DynArray, index: i64) -> Result<usize, OpError> {
    if index >= 0 && index < a.len() as i64 {
        Ok(index as usize)
    } else {
        Err(OpError::OutOfBounds {
            row: index,
            col: 0,
            rows: a.len(),
            cols: 1,
        })
    }
}

pub fn try_add(a: &DynArray, b: &DynArray) -> Result<DynArray, OpError> {
    require_same_len(a, b)?;
    Ok(DynArray {
        values: &a.values + &b.values,
    })
}

pub fn try_sub(a: &DynArray, b: &DynArray) -> Result<DynArray, OpError> {
    require_same_len(a, b)?;
    Ok(DynArray {
        values: &a.values - &b.values,
    })
}

/// Elementwise product, not a dot product.
pub fn try_mul(a: &DynArray, b: &DynArray) -> Result<DynArray, OpError> {
    require_same_len(a, b)?;
    Ok(DynArray {
        values: a.values.component_mul(&b.values),
    })
}

/// Elementwise minimum of two arrays.
pub fn try_min(a: &DynArray, b: &DynArray) -> Result<DynArray, OpError> {
    require_same_len(a, b)?;
    Ok(DynArray {
        values: a.values.zip_map(&b.values, f64::min),
    })
}

/// Elementwise maximum of two arrays.
pub fn try_max(a: &DynArray, b: &DynArray) -> Result<DynArray, OpError> {
    require_same_len(a, b)?;
    Ok(DynArray {
        values: a.values.zip_map(&b.values, f64::max),
    })
}

pub fn scalar_add(a: &DynArray, s: f64) -> DynArray {
    DynArray {
        values: a.values.map(|x| x + s),
    }
}

pub fn scalar_sub(a: &DynArray, s: f64) -> DynArray {
    DynArray {
        values: a.values.map(|x| x - s),
    }
}

pub fn scalar_mul(a: &DynArray, s: f64) -> DynArray {
    DynArray {
        values: &a.values * s,
    }
}

pub fn abs(a: &DynArray) -> DynArray {
    DynArray {
        values: a.values.abs(),
    }
}

pub fn try_get(a: &DynArray, index: i64) -> Result<f64, OpError> {
    let i = check_index(a, index)?;
    Ok(a.values[i])
}

/// In-place element write, matching the host's by-ref update node.
pub fn try_set(a: &mut DynArray, index: i64, value: f64) -> Result<(), OpError> {
    let i = check_index(a, index)?;
    a.values[i] = value;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn binary_ops_are_elementwise() {
        let a = DynArray::from_slice(&[1.0, -2.0, 3.0]);
        let b = DynArray::from_slice(&[4.0, 5.0, -6.0]);
        assert_eq!(try_add(&a, &b).unwrap().to_vec(), vec![5.0, 3.0, -3.0]);
        assert_eq!(try_sub(&a, &b).unwrap().to_vec(), vec![-3.0, -7.0, 9.0]);
        assert_eq!(try_mul(&a, &b).unwrap().to_vec(), vec![4.0, -10.0, -18.0]);
        assert_eq!(try_min(&a, &b).unwrap().to_vec(), vec![1.0, -2.0, -6.0]);
        assert_eq!(try_max(&a, &b).unwrap().to_vec(), vec![4.0, 5.0, 3.0]);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let a = DynArray::from_slice(&[1.0, 2.0]);
        let b = DynArray::from_slice(&[1.0]);
        assert_eq!(
            try_add(&a, &b),
            Err(OpError::LengthMismatch { left: 2, right: 1 })
        );
        assert!(try_min(&a, &b).is_err());
    }

    #[test]
    fn scalar_ops_shift_every_element() {
        let a = DynArray::from_slice(&[1.0, 2.0]);
        assert_eq!(scalar_add(&a, 0.5).to_vec(), vec![1.5, 2.5]);
        assert_eq!(scalar_sub(&a, 1.0).to_vec(), vec![0.0, 1.0]);
        assert_eq!(scalar_mul(&a, -2.0).to_vec(), vec![-2.0, -4.0]);
    }

    #[test]
    fn abs_drops_signs() {
        let a = DynArray::from_slice(&[-1.0, 2.0, -0.5]);
        assert_eq!(abs(&a).to_vec(), vec![1.0, 2.0, 0.5]);
    }

    #[test]
    fn element_access_is_bounds_checked() {
        let mut a = DynArray::from_slice(&[1.0, 2.0]);
        assert_abs_diff_eq!(try_get(&a, 1).unwrap(), 2.0);
        try_set(&mut a, 0, 9.0).unwrap();
        assert_eq!(a.to_vec(), vec![9.0, 2.0]);
        assert!(try_get(&a, 2).is_err());
        assert!(try_set(&mut a, -1, 0.0).is_err());
        assert_eq!(a.to_vec(), vec![9.0, 2.0]);
    }
}
