use karmul::{multiply, Natural};

fn main() {
    let x = Natural::from(123u64);
    let y = Natural::from(123u64);
    println!("{}", multiply(&x, &y));
}
