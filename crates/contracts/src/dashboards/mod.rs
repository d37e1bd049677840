pub mod d001_summary;
