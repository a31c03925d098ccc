mod class_file;

pub use class_file::ClassFile;
