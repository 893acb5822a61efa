pub mod timing; // Tempo arithmetic: note durations and bar/beat positions
