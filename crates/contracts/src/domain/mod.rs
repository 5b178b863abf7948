pub mod common;

pub mod categoria;
pub mod compra;
pub mod factura;
pub mod factura_detalle;
pub mod historial;
pub mod inventario;
pub mod producto;
pub mod promocion;
pub mod promocion_producto;
pub mod proveedor;
pub mod superficie;
