pub use direction::*;

use {
    super::*,
    glam::{BVec2, IVec2},
    nom::{
        character::complete::line_ending,
        combinator::opt,
        error::{Error as NomError, ErrorKind as NomErrorKind},
        multi::many1_count,
        sequence::tuple,
        Err,
    },
    std::{
        fmt::{Debug, DebugList, Formatter, Result as FmtResult, Write},
        mem::transmute,
        str::from_utf8,
    },
    strum::IntoEnumIterator,
};

mod direction {
    use {
        super::*,
        static_assertions::const_assert,
        std::mem::transmute,
        strum::{EnumCount, EnumIter},
    };

    macro_rules! define_direction {
        {
            $( #[$meta:meta] )*
            $vis:vis enum $direction:ident {
                $(
                    $( #[$variant_meta:meta] )?
                    $variant:ident,
                )*
            }
        } => {
            $(#[$meta])*
            $vis enum $direction {
                $(
                    $( #[$variant_meta] )?
                    $variant,
                )*
            }

            const VECS: [IVec2; $direction::COUNT] = [
                $( $direction::$variant.vec_internal(), )*
            ];
        };
    }

    define_direction! {
        #[derive(Copy, Clone, Debug, Default, EnumCount, EnumIter, Eq, Hash, PartialEq)]
        #[repr(u8)]
        pub enum Direction {
            #[default]
            North,
            East,
            South,
            West,
        }
    }

    // This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2
    // bits, which is the same as masking by `MASK`
    const_assert!(Direction::COUNT == 4_usize);

    impl Direction {
        pub const COUNT_U8: u8 = Self::COUNT as u8;
        pub const MASK: u8 = Self::COUNT_U8 - 1_u8;

        #[inline]
        pub const fn vec(self) -> IVec2 {
            VECS[self as usize]
        }

        #[inline]
        pub const fn from_u8(value: u8) -> Self {
            // SAFETY: See `const_assert` above
            unsafe { transmute(value & Self::MASK) }
        }

        #[inline]
        pub const fn next(self) -> Self {
            Self::from_u8(self as u8 + 1_u8)
        }

        const fn vec_internal(self) -> IVec2 {
            match self {
                Self::North => IVec2::NEG_Y,
                Self::East => IVec2::X,
                Self::South => IVec2::Y,
                Self::West => IVec2::NEG_X,
            }
        }
    }
}

/// Iterates over the 8 orthogonal and diagonal unit offsets, pairing each cardinal direction with
/// the diagonal between it and the next cardinal direction.
pub fn iter_omni_dir_vecs() -> impl Iterator<Item = IVec2> {
    Direction::iter().flat_map(|dir| {
        [false, true]
            .into_iter()
            .map(move |is_diagonal| dir.vec() + (is_diagonal as i32 * dir.next().vec()))
    })
}

/// Iterates over the 8 positions surrounding `pos`, with no bounds checking: callers filter
/// through `Grid2D::get` or similar.
pub fn iter_neighbor_poses(pos: IVec2) -> impl Iterator<Item = IVec2> {
    iter_omni_dir_vecs().map(move |dir_vec| pos + dir_vec)
}

pub struct SideLen(pub usize);

impl From<SideLen> for IVec2 {
    fn from(side_len: SideLen) -> Self {
        IVec2::new(side_len.0 as i32, side_len.0 as i32)
    }
}

pub fn grid_2d_contains(pos: IVec2, dimensions: IVec2) -> bool {
    (pos.cmpge(IVec2::ZERO) & pos.cmplt(dimensions)).all()
}

pub fn grid_2d_pos_from_index_and_dimensions(index: usize, dimensions: IVec2) -> IVec2 {
    let x: usize = dimensions.x as usize;

    IVec2::new((index % x) as i32, (index / x) as i32)
}

pub fn grid_2d_try_index_from_pos_and_dimensions(pos: IVec2, dimensions: IVec2) -> Option<usize> {
    grid_2d_contains(pos, dimensions)
        .then(|| pos.y as usize * dimensions.x as usize + pos.x as usize)
}

pub struct Grid2D<T> {
    cells: Vec<T>,

    /// Should only contain unsigned values, but is signed for ease of use for iterating
    dimensions: IVec2,
}

impl<T> Grid2D<T> {
    pub fn try_from_cells_and_dimensions(cells: Vec<T>, dimensions: IVec2) -> Option<Self> {
        if dimensions.cmpge(IVec2::ZERO) == BVec2::TRUE
            && cells.len() == dimensions.x as usize * dimensions.y as usize
        {
            Some(Self { cells, dimensions })
        } else {
            None
        }
    }

    pub fn try_from_cells_and_width(cells: Vec<T>, width: usize) -> Option<Self> {
        let cells_len: usize = cells.len();

        if cells_len % width != 0_usize {
            None
        } else {
            Some(Self {
                cells,
                dimensions: IVec2::new(width as i32, (cells_len / width) as i32),
            })
        }
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.dimensions
    }

    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        grid_2d_contains(pos, self.dimensions)
    }

    #[inline]
    pub fn index_from_pos(&self, pos: IVec2) -> usize {
        pos.y as usize * self.dimensions.x as usize + pos.x as usize
    }

    pub fn try_index_from_pos(&self, pos: IVec2) -> Option<usize> {
        grid_2d_try_index_from_pos_and_dimensions(pos, self.dimensions)
    }

    pub fn pos_from_index(&self, index: usize) -> IVec2 {
        grid_2d_pos_from_index_and_dimensions(index, self.dimensions)
    }

    pub fn get(&self, pos: IVec2) -> Option<&T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &self.cells[index])
    }

    pub fn get_mut(&mut self, pos: IVec2) -> Option<&mut T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &mut self.cells[index])
    }

    pub fn iter_filtered_positions<'a, P: Fn(&T) -> bool + 'a>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = IVec2> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| predicate(cell).then(|| self.pos_from_index(index)))
    }

    pub fn iter_positions_with_cell<'a>(&'a self, target: &'a T) -> impl Iterator<Item = IVec2> + 'a
    where
        T: PartialEq,
    {
        self.iter_filtered_positions(|cell| *cell == *target)
    }
}

impl<T: Clone> Clone for Grid2D<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            dimensions: self.dimensions,
        }
    }
}

impl<T: Debug> Debug for Grid2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Grid2D")?;
        let mut y_list: DebugList = f.debug_list();

        for y in 0_i32..self.dimensions.y {
            let start: usize = (y * self.dimensions.x) as usize;

            y_list.entry(&&self.cells[start..(start + self.dimensions.x as usize)]);
        }

        y_list.finish()
    }
}

impl<T: Parse> Parse for Grid2D<T> {
    fn parse(input: &str) -> IResult<&str, Self> {
        let mut width: Option<usize> = None;
        let mut cells: Vec<T> = Vec::new();
        let (input, _) = many1_count(map_res(
            tuple((T::parse, opt(line_ending))),
            |(cell, opt_line_ending)| -> Result<(), ()> {
                cells.push(cell);

                if opt_line_ending.is_some() {
                    match width {
                        Some(width) => {
                            if cells.len() % width != 0_usize {
                                Err(())?;
                            }
                        }
                        None => {
                            width = Some(cells.len());
                        }
                    }
                }

                Ok(())
            },
        ))(input)?;

        if let Some(width) = width {
            if cells.len() % width != 0_usize {
                Err(Err::Failure(NomError::new(input, NomErrorKind::ManyMN)))
            } else {
                Ok((
                    input,
                    Grid2D::try_from_cells_and_width(cells, width).unwrap(),
                ))
            }
        } else {
            let width: usize = cells.len();

            Ok((
                input,
                Grid2D::try_from_cells_and_width(cells, width).unwrap(),
            ))
        }
    }
}

impl<T: PartialEq> PartialEq for Grid2D<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions && self.cells == other.cells
    }
}

/// A marker trait to indicate that a type is a single byte, and any possible value is a valid ASCII
/// byte.
///
/// # Safety
///
/// Only implement this on a trait that meets the following criteria:
///
/// * `std::mem::size_of::<Self>() == 1_usize`
/// * `std::str::from_utf8(std::mem::transmute::<[Self], [u8]>(value)).is_ok()` for any `value:
/// [Self]`.
pub unsafe trait IsValidAscii {}

impl<T: IsValidAscii> From<Grid2D<T>> for String {
    fn from(value: Grid2D<T>) -> Self {
        let dimensions: IVec2 = value.dimensions;
        let width: usize = dimensions.x as usize;
        let height: usize = dimensions.y as usize;

        // SAFETY: Guaranteed by `T` implementing `IsValidAscii`
        let bytes: &[u8] = unsafe { transmute(value.cells()) };

        let mut string: String = String::with_capacity((width + 1_usize) * height);

        for y in 0_usize..height {
            let start: usize = y * width;
            let end: usize = start + width;
            let row_str: &str = from_utf8(&bytes[start..end]).unwrap_or_else(|e| {
                panic!("A `Grid2D` of ASCII cells contained an invalid UTF-8 slice: {e:?}");
            });

            writeln!(&mut string, "{row_str}").unwrap_or_else(|e| {
                panic!(
                    "`String::write_fmt` returned an `Err`, despite both its `write_str` and
                    `write_char` definitions returning an `Ok`: {e:?}"
                );
            });
        }

        string
    }
}
