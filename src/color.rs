/*
 * Copyright (C) 2026 The Intercards Authors
 *
 * This file is part of Intercards.
 *
 * Intercards is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Intercards is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Intercards.  If not, see <http://www.gnu.org/licenses/>.
 */

use std::ops::Deref;

use ratatui::style::Color as RatColor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Color {
    r: u8,
    g: u8,
    b: u8,
}

#[repr(transparent)]
pub(crate) struct Percent(f64);

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }
}

impl Deref for Percent {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Color {
    pub const CARD: Color = Color::new(0xC8, 0xC8, 0xC8);
    pub const NEXT: Color = Color::new(0x00, 0xD7, 0x5F);
    pub const PREVIOUS: Color = Color::new(0xFF, 0xAF, 0x00);
    pub const DONE: Color = Color::new(0x5F, 0xAF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn blend_with(self, other: Color, pct_other: impl Into<Percent>) -> Self {
        let pct_other = *pct_other.into();
        let pct_self = 1.0 - pct_other;
        let mix = |a: u8, b: u8| ((a as f64 * pct_self) + (b as f64 * pct_other)).round() as u8;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl From<Color> for RatColor {
    fn from(value: Color) -> Self {
        RatColor::Rgb(value.r, value.g, value.b)
    }
}
