//! GreenSys 网关 - 学校学习管理系统的 BFF 服务
//!
//! 基于 Actix Web 构建，位于浏览器与 GreenSys 后端 API 之间。
//!
//! # 架构
//! - `backend`: 上游后端抽象（REST / 内存）
//! - `config`: 配置管理
//! - `dataflow`: 集合获取、变更派发与并发关联
//! - `errors`: 统一错误处理
//! - `listing`: 搜索、筛选、排序与分页
//! - `middlewares`: 会话中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `session`: 会话与未认证处理
//! - `utils`: 工具函数

pub mod backend;
pub mod config;
pub mod dataflow;
pub mod errors;
pub mod listing;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod session;
pub mod utils;
