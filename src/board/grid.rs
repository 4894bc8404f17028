//! Square token grid.

use std::ops::Index;

use crate::core::{Color, ColorSource, ConfigError, Coordinate, Token, MAX_GRID_SIZE};

/// Fixed `size`×`size` array of tokens, stored row-major.
///
/// Every slot holds exactly one token for the lifetime of the grid. Tokens
/// are never moved or reallocated; only their colors change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    tokens: Vec<Token>,
}

impl Grid {
    /// Create a grid whose colors are all drawn from `source`, row by row.
    ///
    /// `size` and `num_colors` must already be validated.
    pub(crate) fn random(size: usize, num_colors: u8, source: &mut impl ColorSource) -> Self {
        let tokens = (0..size)
            .flat_map(|y| (0..size).map(move |x| Coordinate::new(x, y)))
            .map(|coordinate| Token::new(coordinate, source.next_color(num_colors)))
            .collect();

        Self { size, tokens }
    }

    /// Create a grid from explicit colors, `rows[y][x]`.
    ///
    /// The layout must be square with a side in `1..=MAX_GRID_SIZE`.
    pub fn from_layout(rows: &[Vec<Color>], num_colors: u8) -> Result<Self, ConfigError> {
        let size = rows.len();
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(ConfigError::InvalidGridSize {
                actual: size,
                max: MAX_GRID_SIZE,
            });
        }
        let mut tokens = Vec::with_capacity(size * size);

        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(ConfigError::LayoutRowLength {
                    row: y,
                    expected: size,
                    actual: row.len(),
                });
            }
            for (x, &color) in row.iter().enumerate() {
                if !color.is_valid(num_colors) {
                    return Err(ConfigError::LayoutColorOutOfRange {
                        x,
                        y,
                        color,
                        num_colors,
                    });
                }
                tokens.push(Token::new(Coordinate::new(x, y), color));
            }
        }

        Ok(Self { size, tokens })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn slot(&self, coordinate: Coordinate) -> Option<usize> {
        coordinate
            .in_bounds(self.size)
            .then(|| coordinate.y * self.size + coordinate.x)
    }

    /// Check if `coordinate` lies on this grid.
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.in_bounds(self.size)
    }

    /// Token at `coordinate`, or `None` if off the grid.
    #[must_use]
    pub fn get(&self, coordinate: Coordinate) -> Option<&Token> {
        self.slot(coordinate).map(|i| &self.tokens[i])
    }

    pub(crate) fn get_mut(&mut self, coordinate: Coordinate) -> Option<&mut Token> {
        self.slot(coordinate).map(move |i| &mut self.tokens[i])
    }

    /// Iterate over all tokens in row-major order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Iterate over the rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Token]> {
        self.tokens.chunks(self.size)
    }

    /// Coordinates of every token with `color`, in row-major order.
    pub fn coordinates_with_color(&self, color: Color) -> impl Iterator<Item = Coordinate> + '_ {
        self.tokens
            .iter()
            .filter(move |t| t.color() == color)
            .map(Token::coordinate)
    }

    /// Number of tokens with `color`.
    #[must_use]
    pub fn color_count(&self, color: Color) -> usize {
        self.coordinates_with_color(color).count()
    }

    /// Snapshot of all colors as `rows[y][x]`.
    #[must_use]
    pub fn colors(&self) -> Vec<Vec<Color>> {
        self.rows()
            .map(|row| row.iter().map(Token::color).collect())
            .collect()
    }

    /// Redraw every color from `source`, row by row.
    pub(crate) fn randomize_all(&mut self, source: &mut impl ColorSource, num_colors: u8) {
        for token in &mut self.tokens {
            token.randomize_color(source, num_colors);
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        for token in &mut self.tokens {
            token.set_selected(false);
        }
    }

    /// Remove the token at `coordinate` by letting its column fall one step.
    ///
    /// Every color above the slot moves down one row and row 0 of the column
    /// gets a fresh color. Other columns are untouched.
    pub(crate) fn drop_column_into(
        &mut self,
        coordinate: Coordinate,
        source: &mut impl ColorSource,
        num_colors: u8,
    ) {
        if !self.contains(coordinate) {
            return;
        }
        let x = coordinate.x;

        for y in (1..=coordinate.y).rev() {
            let above = self.tokens[(y - 1) * self.size + x].color();
            self.tokens[y * self.size + x].set_color(above);
        }
        self.tokens[x].randomize_color(source, num_colors);
    }
}

impl Index<Coordinate> for Grid {
    type Output = Token;

    /// Panics if `coordinate` is off the grid.
    fn index(&self, coordinate: Coordinate) -> &Self::Output {
        match self.get(coordinate) {
            Some(token) => token,
            None => panic!("{} is outside a {}x{} grid", coordinate, self.size, self.size),
        }
    }
}

/// One line per row; colors as digits, selected tokens in brackets.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for token in row {
                if token.is_selected() {
                    write!(f, "[{}]", token.color().raw())?;
                } else {
                    write!(f, " {} ", token.color().raw())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
