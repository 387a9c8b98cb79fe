pub mod clustering_coefficient;
