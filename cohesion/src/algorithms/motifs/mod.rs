pub mod triangle_count;
