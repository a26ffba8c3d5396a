//! Static marker to chromosome table.
//!
//! The table is compiled into the binary and never changes at runtime.
//! Coordinates follow STRBase (<https://strbase.nist.gov/chrom.htm>).

use crate::core::types::Linkage;

/// Chromosome a marker sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chromosome {
    Autosome(u8),
    X,
    Y,
}

/// Genomic position of a known marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenomicCoordinates {
    pub chromosome: Chromosome,
    /// Start position; 0 where the table does not record one
    pub start: u64,
}

impl GenomicCoordinates {
    const fn autosomal(chr: u8, start: u64) -> Self {
        Self {
            chromosome: Chromosome::Autosome(chr),
            start,
        }
    }

    const fn y_linked() -> Self {
        Self {
            chromosome: Chromosome::Y,
            start: 0,
        }
    }

    const fn x_linked() -> Self {
        Self {
            chromosome: Chromosome::X,
            start: 0,
        }
    }

    /// Linkage class of the chromosome
    #[must_use]
    pub fn linkage(&self) -> Linkage {
        match self.chromosome {
            Chromosome::Autosome(_) => Linkage::Autosomal,
            Chromosome::X => Linkage::XLinked,
            Chromosome::Y => Linkage::YLinked,
        }
    }
}

/// Look up the coordinates of a marker. Matching ignores case.
#[must_use]
pub fn locus_coordinates(id: &str) -> Option<GenomicCoordinates> {
    let coords = match id.to_ascii_uppercase().as_str() {
        "D1S1656" => GenomicCoordinates::autosomal(1, 228_972_000),
        "TPOX" => GenomicCoordinates::autosomal(2, 1_472_000),
        "D2S441" => GenomicCoordinates::autosomal(2, 68_213_613),
        "D2S1338" => GenomicCoordinates::autosomal(2, 218_705_000),
        "D3S1358" => GenomicCoordinates::autosomal(3, 45_557_000),
        "FGA" => GenomicCoordinates::autosomal(4, 155_866_000),
        "CSF1PO" => GenomicCoordinates::autosomal(5, 149_436_000),
        "D5S818" => GenomicCoordinates::autosomal(5, 123_139_000),
        "SE33" => GenomicCoordinates::autosomal(6, 89_043_000),
        "D7S820" => GenomicCoordinates::autosomal(7, 83_433_000),
        "D8S1179" => GenomicCoordinates::autosomal(8, 125_976_000),
        "D10S1248" => GenomicCoordinates::autosomal(10, 130_566_908),
        "TH01" => GenomicCoordinates::autosomal(11, 2_149_000),
        "VWA" => GenomicCoordinates::autosomal(12, 5_963_000),
        "D12S391" => GenomicCoordinates::autosomal(12, 12_341_000),
        "D13S317" => GenomicCoordinates::autosomal(13, 81_620_000),
        "D14S1434" => GenomicCoordinates::autosomal(14, 93_298_432),
        "PENTA E" => GenomicCoordinates::autosomal(15, 95_175_000),
        "D16S539" => GenomicCoordinates::autosomal(16, 84_944_000),
        "D18S51" => GenomicCoordinates::autosomal(18, 59_100_000),
        "D19S433" => GenomicCoordinates::autosomal(19, 35_109_000),
        "PENTA D" => GenomicCoordinates::autosomal(21, 43_880_000),
        "D21S11" => GenomicCoordinates::autosomal(21, 19_476_000),
        "D22S1045" => GenomicCoordinates::autosomal(22, 35_779_368),
        "DYS576" | "DYS389I" | "DYS635" | "DYS389II" | "DYS627" | "DYS460" | "DYS458"
        | "DYS19" | "YGATAH4" | "DYS448" | "DYS391" | "DYS456" | "DYS390" | "DYS438"
        | "DYS392" | "DYS518" | "DYS570" | "DYS437" | "DYS385 A/B" | "DYS449" | "DYS393"
        | "DYS439" | "DYS481" | "DYF387S1" | "DYS533" | "YINDEL" => {
            GenomicCoordinates::y_linked()
        }
        "DXS10101" => GenomicCoordinates::x_linked(),
        _ => return None,
    };
    Some(coords)
}

/// Linkage class of a marker. Markers missing from the table count as autosomal.
#[must_use]
pub fn linkage_of(id: &str) -> Linkage {
    locus_coordinates(id).map_or(Linkage::Autosomal, |c| c.linkage())
}
