//! Black-box client tests driving the trading manager through a directory lookup and the
//! parameters supplied by a harness config.
