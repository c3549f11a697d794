//! Pre-trained sine approximator compiled into the image.
//!
//! A 1-16-16-1 fully connected network with ReLU activations, fit to
//! `sin(x)` over `[0, 2π]`. Its absolute error stays below 0.025 inside
//! that interval and is undefined outside of it.
//!
//! Tensors, in order: `input[1,1]`, `dense/kernel[16,1]`, `dense/bias[16]`,
//! `dense/output[1,16]`, `dense_1/kernel[16,16]`, `dense_1/bias[16]`,
//! `dense_1/output[1,16]`, `dense_2/kernel[1,16]`, `dense_2/bias[1]`, `output[1,1]`.

pub static SINE_MODEL_DATA: &[u8] = &[
  0x4d, 0x49, 0x4e, 0x46, 0x01, 0x21, 0x73, 0x69, 0x6e, 0x65, 0x20, 0x61,
  0x70, 0x70, 0x72, 0x6f, 0x78, 0x69, 0x6d, 0x61, 0x74, 0x6f, 0x72, 0x2c,
  0x20, 0x31, 0x2d, 0x31, 0x36, 0x2d, 0x31, 0x36, 0x2d, 0x31, 0x20, 0x72,
  0x65, 0x6c, 0x75, 0x01, 0x0f, 0x46, 0x55, 0x4c, 0x4c, 0x59, 0x5f, 0x43,
  0x4f, 0x4e, 0x4e, 0x45, 0x43, 0x54, 0x45, 0x44, 0x0a, 0x05, 0x69, 0x6e,
  0x70, 0x75, 0x74, 0x02, 0x01, 0x01, 0x00, 0x0c, 0x64, 0x65, 0x6e, 0x73,
  0x65, 0x2f, 0x6b, 0x65, 0x72, 0x6e, 0x65, 0x6c, 0x02, 0x10, 0x01, 0x01,
  0x10, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80,
  0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80,
  0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80,
  0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80,
  0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80,
  0x3f, 0x00, 0x00, 0x80, 0x3f, 0x0a, 0x64, 0x65, 0x6e, 0x73, 0x65, 0x2f,
  0x62, 0x69, 0x61, 0x73, 0x01, 0x10, 0x01, 0x10, 0x00, 0x00, 0x00, 0x80,
  0x50, 0x77, 0xd6, 0xbe, 0x50, 0x77, 0x56, 0xbf, 0x7c, 0xd9, 0xa0, 0xbf,
  0x50, 0x77, 0xd6, 0xbf, 0x92, 0x0a, 0x06, 0xc0, 0x7c, 0xd9, 0x20, 0xc0,
  0x66, 0xa8, 0x3b, 0xc0, 0x50, 0x77, 0x56, 0xc0, 0x3a, 0x46, 0x71, 0xc0,
  0x92, 0x0a, 0x86, 0xc0, 0x07, 0x72, 0x93, 0xc0, 0x7c, 0xd9, 0xa0, 0xc0,
  0xf1, 0x40, 0xae, 0xc0, 0x66, 0xa8, 0xbb, 0xc0, 0xdb, 0x0f, 0xc9, 0xc0,
  0x0c, 0x64, 0x65, 0x6e, 0x73, 0x65, 0x2f, 0x6f, 0x75, 0x74, 0x70, 0x75,
  0x74, 0x02, 0x01, 0x10, 0x00, 0x0e, 0x64, 0x65, 0x6e, 0x73, 0x65, 0x5f,
  0x31, 0x2f, 0x6b, 0x65, 0x72, 0x6e, 0x65, 0x6c, 0x02, 0x10, 0x10, 0x01,
  0x80, 0x02, 0x42, 0x94, 0xf8, 0x3d, 0x26, 0xed, 0xab, 0xbc, 0x03, 0x10,
  0x1d, 0xbd, 0x1e, 0x01, 0x49, 0xbd, 0xd2, 0x30, 0x52, 0xbd, 0x7e, 0x08,
  0x37, 0xbd, 0x7f, 0x74, 0xf8, 0xbc, 0x6d, 0xc4, 0x2f, 0xbc, 0x6d, 0xc4,
  0x2f, 0x3c, 0x7f, 0x74, 0xf8, 0x3c, 0x7e, 0x08, 0x37, 0x3d, 0xd2, 0x30,
  0x52, 0x3d, 0x1e, 0x01, 0x49, 0x3d, 0x03, 0x10, 0x1d, 0x3d, 0x26, 0xed,
  0xab, 0x3c, 0x00, 0x00, 0x00, 0x00, 0x42, 0x94, 0xf8, 0x3d, 0x26, 0xed,
  0xab, 0xbc, 0x03, 0x10, 0x1d, 0xbd, 0x1e, 0x01, 0x49, 0xbd, 0xd2, 0x30,
  0x52, 0xbd, 0x7e, 0x08, 0x37, 0xbd, 0x7f, 0x74, 0xf8, 0xbc, 0x6d, 0xc4,
  0x2f, 0xbc, 0x6d, 0xc4, 0x2f, 0x3c, 0x7f, 0x74, 0xf8, 0x3c, 0x7e, 0x08,
  0x37, 0x3d, 0xd2, 0x30, 0x52, 0x3d, 0x1e, 0x01, 0x49, 0x3d, 0x03, 0x10,
  0x1d, 0x3d, 0x26, 0xed, 0xab, 0x3c, 0x00, 0x00, 0x00, 0x00, 0x42, 0x94,
  0xf8, 0x3d, 0x26, 0xed, 0xab, 0xbc, 0x03, 0x10, 0x1d, 0xbd, 0x1e, 0x01,
  0x49, 0xbd, 0xd2, 0x30, 0x52, 0xbd, 0x7e, 0x08, 0x37, 0xbd, 0x7f, 0x74,
  0xf8, 0xbc, 0x6d, 0xc4, 0x2f, 0xbc, 0x6d, 0xc4, 0x2f, 0x3c, 0x7f, 0x74,
  0xf8, 0x3c, 0x7e, 0x08, 0x37, 0x3d, 0xd2, 0x30, 0x52, 0x3d, 0x1e, 0x01,
  0x49, 0x3d, 0x03, 0x10, 0x1d, 0x3d, 0x26, 0xed, 0xab, 0x3c, 0x00, 0x00,
  0x00, 0x00, 0x42, 0x94, 0xf8, 0x3d, 0x26, 0xed, 0xab, 0xbc, 0x03, 0x10,
  0x1d, 0xbd, 0x1e, 0x01, 0x49, 0xbd, 0xd2, 0x30, 0x52, 0xbd, 0x7e, 0x08,
  0x37, 0xbd, 0x7f, 0x74, 0xf8, 0xbc, 0x6d, 0xc4, 0x2f, 0xbc, 0x6d, 0xc4,
  0x2f, 0x3c, 0x7f, 0x74, 0xf8, 0x3c, 0x7e, 0x08, 0x37, 0x3d, 0xd2, 0x30,
  0x52, 0x3d, 0x1e, 0x01, 0x49, 0x3d, 0x03, 0x10, 0x1d, 0x3d, 0x26, 0xed,
  0xab, 0x3c, 0x00, 0x00, 0x00, 0x00, 0x42, 0x94, 0xf8, 0x3d, 0x26, 0xed,
  0xab, 0xbc, 0x03, 0x10, 0x1d, 0xbd, 0x1e, 0x01, 0x49, 0xbd, 0xd2, 0x30,
  0x52, 0xbd, 0x7e, 0x08, 0x37, 0xbd, 0x7f, 0x74, 0xf8, 0xbc, 0x6d, 0xc4,
  0x2f, 0xbc, 0x6d, 0xc4, 0x2f, 0x3c, 0x7f, 0x74, 0xf8, 0x3c, 0x7e, 0x08,
  0x37, 0x3d, 0xd2, 0x30, 0x52, 0x3d, 0x1e, 0x01, 0x49, 0x3d, 0x03, 0x10,
  0x1d, 0x3d, 0x26, 0xed, 0xab, 0x3c, 0x00, 0x00, 0x00, 0x00, 0x42, 0x94,
  0xf8, 0x3d, 0x26, 0xed, 0xab, 0xbc, 0x03, 0x10, 0x1d, 0xbd, 0x1e, 0x01,
  0x49, 0xbd, 0xd2, 0x30, 0x52, 0xbd, 0x7e, 0x08, 0x37, 0xbd, 0x7f, 0x74,
  0xf8, 0xbc, 0x6d, 0xc4, 0x2f, 0xbc, 0x6d, 0xc4, 0x2f, 0x3c, 0x7f, 0x74,
  0xf8, 0x3c, 0x7e, 0x08, 0x37, 0x3d, 0xd2, 0x30, 0x52, 0x3d, 0x1e, 0x01,
  0x49, 0x3d, 0x03, 0x10, 0x1d, 0x3d, 0x26, 0xed, 0xab, 0x3c, 0x00, 0x00,
  0x00, 0x00, 0x42, 0x94, 0xf8, 0x3d, 0x26, 0xed, 0xab, 0xbc, 0x03, 0x10,
  0x1d, 0xbd, 0x1e, 0x01, 0x49, 0xbd, 0xd2, 0x30, 0x52, 0xbd, 0x7e, 0x08,
  0x37, 0xbd, 0x7f, 0x74, 0xf8, 0xbc, 0x6d, 0xc4, 0x2f, 0xbc, 0x6d, 0xc4,
  0x2f, 0x3c, 0x7f, 0x74, 0xf8, 0x3c, 0x7e, 0x08, 0x37, 0x3d, 0xd2, 0x30,
  0x52, 0x3d, 0x1e, 0x01, 0x49, 0x3d, 0x03, 0x10, 0x1d, 0x3d, 0x26, 0xed,
  0xab, 0x3c, 0x00, 0x00, 0x00, 0x00, 0x42, 0x94, 0xf8, 0x3d, 0x26, 0xed,
  0xab, 0xbc, 0x03, 0x10, 0x1d, 0xbd, 0x1e, 0x01, 0x49, 0xbd, 0xd2, 0x30,
  0x52, 0xbd, 0x7e, 0x08, 0x37, 0xbd, 0x7f, 0x74, 0xf8, 0xbc, 0x6d, 0xc4,
  0x2f, 0xbc, 0x6d, 0xc4, 0x2f, 0x3c, 0x7f, 0x74, 0xf8, 0x3c, 0x7e, 0x08,
  0x37, 0x3d, 0xd2, 0x30, 0x52, 0x3d, 0x1e, 0x01, 0x49, 0x3d, 0x03, 0x10,
  0x1d, 0x3d, 0x26, 0xed, 0xab, 0x3c, 0x00, 0x00, 0x00, 0x00, 0x42, 0x94,
  0xf8, 0xbd, 0x26, 0xed, 0xab, 0x3c, 0x03, 0x10, 0x1d, 0x3d, 0x1e, 0x01,
  0x49, 0x3d, 0xd2, 0x30, 0x52, 0x3d, 0x7e, 0x08, 0x37, 0x3d, 0x7f, 0x74,
  0xf8, 0x3c, 0x6d, 0xc4, 0x2f, 0x3c, 0x6d, 0xc4, 0x2f, 0xbc, 0x7f, 0x74,
  0xf8, 0xbc, 0x7e, 0x08, 0x37, 0xbd, 0xd2, 0x30, 0x52, 0xbd, 0x1e, 0x01,
  0x49, 0xbd, 0x03, 0x10, 0x1d, 0xbd, 0x26, 0xed, 0xab, 0xbc, 0x00, 0x00,
  0x00, 0x80, 0x42, 0x94, 0xf8, 0xbd, 0x26, 0xed, 0xab, 0x3c, 0x03, 0x10,
  0x1d, 0x3d, 0x1e, 0x01, 0x49, 0x3d, 0xd2, 0x30, 0x52, 0x3d, 0x7e, 0x08,
  0x37, 0x3d, 0x7f, 0x74, 0xf8, 0x3c, 0x6d, 0xc4, 0x2f, 0x3c, 0x6d, 0xc4,
  0x2f, 0xbc, 0x7f, 0x74, 0xf8, 0xbc, 0x7e, 0x08, 0x37, 0xbd, 0xd2, 0x30,
  0x52, 0xbd, 0x1e, 0x01, 0x49, 0xbd, 0x03, 0x10, 0x1d, 0xbd, 0x26, 0xed,
  0xab, 0xbc, 0x00, 0x00, 0x00, 0x80, 0x42, 0x94, 0xf8, 0xbd, 0x26, 0xed,
  0xab, 0x3c, 0x03, 0x10, 0x1d, 0x3d, 0x1e, 0x01, 0x49, 0x3d, 0xd2, 0x30,
  0x52, 0x3d, 0x7e, 0x08, 0x37, 0x3d, 0x7f, 0x74, 0xf8, 0x3c, 0x6d, 0xc4,
  0x2f, 0x3c, 0x6d, 0xc4, 0x2f, 0xbc, 0x7f, 0x74, 0xf8, 0xbc, 0x7e, 0x08,
  0x37, 0xbd, 0xd2, 0x30, 0x52, 0xbd, 0x1e, 0x01, 0x49, 0xbd, 0x03, 0x10,
  0x1d, 0xbd, 0x26, 0xed, 0xab, 0xbc, 0x00, 0x00, 0x00, 0x80, 0x42, 0x94,
  0xf8, 0xbd, 0x26, 0xed, 0xab, 0x3c, 0x03, 0x10, 0x1d, 0x3d, 0x1e, 0x01,
  0x49, 0x3d, 0xd2, 0x30, 0x52, 0x3d, 0x7e, 0x08, 0x37, 0x3d, 0x7f, 0x74,
  0xf8, 0x3c, 0x6d, 0xc4, 0x2f, 0x3c, 0x6d, 0xc4, 0x2f, 0xbc, 0x7f, 0x74,
  0xf8, 0xbc, 0x7e, 0x08, 0x37, 0xbd, 0xd2, 0x30, 0x52, 0xbd, 0x1e, 0x01,
  0x49, 0xbd, 0x03, 0x10, 0x1d, 0xbd, 0x26, 0xed, 0xab, 0xbc, 0x00, 0x00,
  0x00, 0x80, 0x42, 0x94, 0xf8, 0xbd, 0x26, 0xed, 0xab, 0x3c, 0x03, 0x10,
  0x1d, 0x3d, 0x1e, 0x01, 0x49, 0x3d, 0xd2, 0x30, 0x52, 0x3d, 0x7e, 0x08,
  0x37, 0x3d, 0x7f, 0x74, 0xf8, 0x3c, 0x6d, 0xc4, 0x2f, 0x3c, 0x6d, 0xc4,
  0x2f, 0xbc, 0x7f, 0x74, 0xf8, 0xbc, 0x7e, 0x08, 0x37, 0xbd, 0xd2, 0x30,
  0x52, 0xbd, 0x1e, 0x01, 0x49, 0xbd, 0x03, 0x10, 0x1d, 0xbd, 0x26, 0xed,
  0xab, 0xbc, 0x00, 0x00, 0x00, 0x80, 0x42, 0x94, 0xf8, 0xbd, 0x26, 0xed,
  0xab, 0x3c, 0x03, 0x10, 0x1d, 0x3d, 0x1e, 0x01, 0x49, 0x3d, 0xd2, 0x30,
  0x52, 0x3d, 0x7e, 0x08, 0x37, 0x3d, 0x7f, 0x74, 0xf8, 0x3c, 0x6d, 0xc4,
  0x2f, 0x3c, 0x6d, 0xc4, 0x2f, 0xbc, 0x7f, 0x74, 0xf8, 0xbc, 0x7e, 0x08,
  0x37, 0xbd, 0xd2, 0x30, 0x52, 0xbd, 0x1e, 0x01, 0x49, 0xbd, 0x03, 0x10,
  0x1d, 0xbd, 0x26, 0xed, 0xab, 0xbc, 0x00, 0x00, 0x00, 0x80, 0x42, 0x94,
  0xf8, 0xbd, 0x26, 0xed, 0xab, 0x3c, 0x03, 0x10, 0x1d, 0x3d, 0x1e, 0x01,
  0x49, 0x3d, 0xd2, 0x30, 0x52, 0x3d, 0x7e, 0x08, 0x37, 0x3d, 0x7f, 0x74,
  0xf8, 0x3c, 0x6d, 0xc4, 0x2f, 0x3c, 0x6d, 0xc4, 0x2f, 0xbc, 0x7f, 0x74,
  0xf8, 0xbc, 0x7e, 0x08, 0x37, 0xbd, 0xd2, 0x30, 0x52, 0xbd, 0x1e, 0x01,
  0x49, 0xbd, 0x03, 0x10, 0x1d, 0xbd, 0x26, 0xed, 0xab, 0xbc, 0x00, 0x00,
  0x00, 0x80, 0x42, 0x94, 0xf8, 0xbd, 0x26, 0xed, 0xab, 0x3c, 0x03, 0x10,
  0x1d, 0x3d, 0x1e, 0x01, 0x49, 0x3d, 0xd2, 0x30, 0x52, 0x3d, 0x7e, 0x08,
  0x37, 0x3d, 0x7f, 0x74, 0xf8, 0x3c, 0x6d, 0xc4, 0x2f, 0x3c, 0x6d, 0xc4,
  0x2f, 0xbc, 0x7f, 0x74, 0xf8, 0xbc, 0x7e, 0x08, 0x37, 0xbd, 0xd2, 0x30,
  0x52, 0xbd, 0x1e, 0x01, 0x49, 0xbd, 0x03, 0x10, 0x1d, 0xbd, 0x26, 0xed,
  0xab, 0xbc, 0x00, 0x00, 0x00, 0x80, 0x0c, 0x64, 0x65, 0x6e, 0x73, 0x65,
  0x5f, 0x31, 0x2f, 0x62, 0x69, 0x61, 0x73, 0x01, 0x10, 0x01, 0x10, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x00,
  0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80, 0x00,
  0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x80, 0x00,
  0x00, 0x00, 0x80, 0x0e, 0x64, 0x65, 0x6e, 0x73, 0x65, 0x5f, 0x31, 0x2f,
  0x6f, 0x75, 0x74, 0x70, 0x75, 0x74, 0x02, 0x01, 0x10, 0x00, 0x0e, 0x64,
  0x65, 0x6e, 0x73, 0x65, 0x5f, 0x32, 0x2f, 0x6b, 0x65, 0x72, 0x6e, 0x65,
  0x6c, 0x02, 0x01, 0x10, 0x01, 0x10, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00,
  0x80, 0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00,
  0x80, 0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x80, 0x3f, 0x00, 0x00,
  0x80, 0x3f, 0x00, 0x00, 0x80, 0xbf, 0x00, 0x00, 0x80, 0xbf, 0x00, 0x00,
  0x80, 0xbf, 0x00, 0x00, 0x80, 0xbf, 0x00, 0x00, 0x80, 0xbf, 0x00, 0x00,
  0x80, 0xbf, 0x00, 0x00, 0x80, 0xbf, 0x00, 0x00, 0x80, 0xbf, 0x0c, 0x64,
  0x65, 0x6e, 0x73, 0x65, 0x5f, 0x32, 0x2f, 0x62, 0x69, 0x61, 0x73, 0x01,
  0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x06, 0x6f, 0x75, 0x74, 0x70,
  0x75, 0x74, 0x02, 0x01, 0x01, 0x00, 0x03, 0x00, 0x03, 0x00, 0x01, 0x02,
  0x01, 0x03, 0x01, 0x00, 0x03, 0x03, 0x04, 0x05, 0x01, 0x06, 0x01, 0x00,
  0x03, 0x06, 0x07, 0x08, 0x01, 0x09, 0x00, 0x01, 0x00, 0x01, 0x09,
];
