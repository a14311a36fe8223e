mod j2;
mod kepler;
