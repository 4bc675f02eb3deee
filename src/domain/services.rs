//! Binary numeric display operations, combined through `Multicast` in the
//! demo binary.

pub fn show_sum(n1: f64, n2: f64) {
    println!("Sum = {}", n1 + n2);
}

pub fn show_max(n1: f64, n2: f64) {
    println!("Max = {}", n1.max(n2));
}
