use crate::low_level::{add_assign_digits, sub_assign_digits};
use crate::Natural;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

impl Add for Natural {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<'a> Add<&'a Natural> for Natural {
    type Output = Self;

    fn add(mut self, other: &'a Self) -> Self {
        self += other;
        self
    }
}

impl<'a> Add<Natural> for &'a Natural {
    type Output = Natural;

    fn add(self, mut other: Natural) -> Natural {
        other += self;
        other
    }
}

impl<'a, 'b> Add<&'b Natural> for &'a Natural {
    type Output = Natural;

    fn add(self, other: &'b Natural) -> Natural {
        let (big, small) = if self.digits.len() > other.digits.len() {
            (self, other)
        } else {
            (other, self)
        };
        big.clone() + small
    }
}

impl AddAssign for Natural {
    fn add_assign(&mut self, mut other: Self) {
        // Reuse the longer allocation.
        if self.digits.len() < other.digits.len() {
            std::mem::swap(self, &mut other);
        }
        add_assign_digits(&mut self.digits, &other.digits);
        self.normalize_in_place();
    }
}

impl<'a> AddAssign<&'a Natural> for Natural {
    fn add_assign(&mut self, other: &'a Self) {
        add_assign_digits(&mut self.digits, &other.digits);
        self.normalize_in_place();
    }
}

impl Sub for Natural {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl<'a> Sub<&'a Natural> for Natural {
    type Output = Self;

    fn sub(mut self, other: &'a Self) -> Self {
        self -= other;
        self
    }
}

impl<'a> Sub<Natural> for &'a Natural {
    type Output = Natural;

    fn sub(self, other: Natural) -> Natural {
        self - &other
    }
}

impl<'a, 'b> Sub<&'b Natural> for &'a Natural {
    type Output = Natural;

    fn sub(self, other: &'b Natural) -> Natural {
        let mut out = self.clone();
        out -= other;
        out
    }
}

impl SubAssign for Natural {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

// Panics when other > self; naturals are closed under subtraction only for
// ordered operands. Use checked_sub when the ordering is not known.
impl<'a> SubAssign<&'a Natural> for Natural {
    fn sub_assign(&mut self, other: &'a Self) {
        match (&*self).cmp(other) {
            Ordering::Less => panic!("subtraction underflow"),
            Ordering::Equal => {
                self.digits.clear();
                return;
            }
            Ordering::Greater => {}
        }
        sub_assign_digits(&mut self.digits, &other.digits);
        self.normalize_in_place();
    }
}
