//! The shape capability and its two ways in.
//!
//! [`Polygon`] is the declared contract: a type opts in with `impl Polygon`
//! and the compiler holds it to providing `num_of_sides`. Forgetting the
//! method is a compile error, so there is no runtime "incomplete type":
//!
//! ```compile_fail,E0046
//! use polygons::Polygon;
//!
//! struct Square;
//!
//! impl Polygon for Square {}
//! ```
//!
//! [`Sides`] is what the driver actually dispatches through. Every `Polygon`
//! gets it for free, and [`quacks_like_polygon!`](crate::quacks_like_polygon)
//! hands it to types that merely *look* like a polygon: an inherent
//! `num_of_sides` with the same signature, no `impl Polygon` anywhere.

use std::io::{self, Write};

/// A shape that can report how many sides it has.
pub trait Polygon {
    /// Writes the side count token, followed by a newline, to `out`.
    fn num_of_sides(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Anything that can be walked by a lineup, declared polygon or not.
pub trait Sides {
    fn report_sides(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Short type name, used in logs and error messages.
    fn shape_name(&self) -> &'static str;
}

impl<P: Polygon> Sides for P {
    fn report_sides(&self, out: &mut dyn Write) -> io::Result<()> {
        self.num_of_sides(out)
    }

    fn shape_name(&self) -> &'static str {
        short_type_name::<P>()
    }
}

/// Last path segment of the type's name, generic arguments dropped:
/// `a::Wrapper<b::C>` becomes `Wrapper`.
#[doc(hidden)]
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

/// Adapts types with an inherent `num_of_sides` into [`Sides`] without
/// declaring [`Polygon`].
///
/// The inherent method must have the signature
/// `fn num_of_sides(&self, out: &mut dyn Write) -> io::Result<()>`.
///
/// ```
/// use std::io::{self, Write};
/// use polygons::{quacks_like_polygon, Sides};
///
/// struct Duck;
///
/// impl Duck {
///     pub fn num_of_sides(&self, out: &mut dyn Write) -> io::Result<()> {
///         writeln!(out, "quack")
///     }
/// }
///
/// quacks_like_polygon!(Duck);
///
/// let mut out = Vec::new();
/// Duck.report_sides(&mut out).unwrap();
/// assert_eq!(out, b"quack\n");
/// ```
///
/// A type with no such method is rejected at compile time:
///
/// ```compile_fail,E0599
/// use polygons::quacks_like_polygon;
///
/// struct Rock;
///
/// quacks_like_polygon!(Rock);
/// ```
#[macro_export]
macro_rules! quacks_like_polygon {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Sides for $ty {
                fn report_sides(
                    &self,
                    out: &mut dyn ::std::io::Write,
                ) -> ::std::io::Result<()> {
                    <$ty>::num_of_sides(self, out)
                }

                fn shape_name(&self) -> &'static str {
                    $crate::polygon::short_type_name::<$ty>()
                }
            }
        )+
    };
}
