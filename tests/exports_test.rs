use std::ptr;
use std::thread;

use nativeutils_sample::exports::Java_deltix_NativeUtilsSample_00024Imports_avg;
use nativeutils_sample::{avg, ptrSize};

#[test]
fn test_avg_matches_formula() {
    for a in (-1000..=1000).step_by(37) {
        for b in (-1000..=1000).step_by(53) {
            assert_eq!(avg(a, b), f64::from(a + b) * 0.5, "avg({}, {})", a, b);
        }
    }
}

#[test]
fn test_avg_large_non_overflowing() {
    assert_eq!(avg(i32::MAX - 1, 1), f64::from(i32::MAX) * 0.5);
    assert_eq!(avg(i32::MIN, i32::MAX), -0.5);
}

#[test]
fn test_ptr_size_is_pointer_width() {
    assert_eq!(ptrSize() as usize, std::mem::size_of::<*const u8>());
    assert!(ptrSize() == 4 || ptrSize() == 8);
}

#[test]
fn test_jni_alias_matches_avg() {
    for (a, b) in [(2, 7), (-5, 3), (0, 1), (i32::MIN, i32::MIN)] {
        let result = Java_deltix_NativeUtilsSample_00024Imports_avg(ptr::null_mut(), ptr::null_mut(), a, b);
        assert_eq!(result, avg(a, b));
    }
}

#[test]
fn test_concurrent_calls_are_consistent() {
    let handles: Vec<_> = (0..16)
        .map(|t: i32| {
            thread::spawn(move || {
                for i in 0..10_000 {
                    let a = i * t;
                    let b = i - t;
                    assert_eq!(avg(a, b), f64::from(a + b) * 0.5);
                    assert_eq!(
                        Java_deltix_NativeUtilsSample_00024Imports_avg(ptr::null_mut(), ptr::null_mut(), a, b),
                        avg(a, b)
                    );
                    assert_eq!(ptrSize() as usize, std::mem::size_of::<usize>());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
